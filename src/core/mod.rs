pub mod action;
pub mod classifier;
pub mod error;
pub mod ignore;
pub mod kind;
pub mod link;
pub mod menu;
pub mod request;
pub mod resolver;
pub mod sender;

pub use action::{Action, ActionKind, ActionSpec};
pub use classifier::{Classifier, ClassifierEngine};
pub use error::{LinkError, LinkResult};
pub use kind::{ContentKind, DeliveryMode, Identifiers, Modifiers, Platform};
pub use link::DecomposedUrl;
pub use menu::{MatchPattern, MenuRegistry};
pub use request::{build_request, RequestDescriptor, DISPATCH_MARKER};
pub use resolver::LinkResolver;
pub use sender::{LocalSender, Sender};
