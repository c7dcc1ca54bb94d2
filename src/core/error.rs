use crate::core::{ContentKind, Platform};
use thiserror::Error;

/// Reasons a click produces no request.
///
/// None of these are fatal: the caller drops the invocation and the user can
/// retry on a more specific link.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    #[error("no {kind} identifier found in link")]
    MissingIdentifier { kind: ContentKind },

    #[error("{platform} path {path:?} is not a content page")]
    IgnoredPath { platform: Platform, path: String },

    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl LinkError {
    /// `IgnoredPath` is a defined no-op rather than a failure.
    pub fn is_ignored(&self) -> bool {
        matches!(self, LinkError::IgnoredPath { .. })
    }
}

impl From<url::ParseError> for LinkError {
    fn from(err: url::ParseError) -> Self {
        LinkError::MalformedUrl(err.to_string())
    }
}

pub type LinkResult<T> = std::result::Result<T, LinkError>;
