use crate::core::ignore::channel_root;
use crate::core::{Classifier, ContentKind, DecomposedUrl, Identifiers, LinkError, LinkResult, Platform};

pub struct KickClassifier;

impl Classifier for KickClassifier {
    fn name(&self) -> &'static str {
        "Kick"
    }

    fn platform(&self) -> Platform {
        Platform::Kick
    }

    fn suitable(&self, url: &DecomposedUrl) -> bool {
        url.host_is("kick.com")
    }

    fn classify(&self, kind: ContentKind, url: &DecomposedUrl) -> LinkResult<Identifiers> {
        match kind {
            ContentKind::Channel => Ok(Identifiers::channel(channel_root(url, Platform::Kick)?)),
            _ => Err(LinkError::MissingIdentifier { kind }),
        }
    }
}
