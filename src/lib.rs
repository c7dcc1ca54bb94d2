pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;
pub mod utils;

pub use config::Config;
pub use core::{
    Action, ActionKind, ContentKind, DecomposedUrl, DeliveryMode, LinkError, LinkResolver, MenuRegistry,
    Platform, RequestDescriptor,
};
pub use extractors::{KickClassifier, TwitchClassifier, YouTubeClassifier};
