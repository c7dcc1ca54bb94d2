use crate::core::{Classifier, ContentKind, DecomposedUrl, Identifiers, LinkError, LinkResult, Platform};
use crate::extractors::non_empty;

pub struct YouTubeClassifier;

impl YouTubeClassifier {
    pub fn extract_video_id(&self, url: &DecomposedUrl) -> Option<String> {
        // Short links carry the id as the first path segment
        if url.host_is("youtu.be") {
            return non_empty(url.segment(0)).or_else(|| non_empty(url.query("v")));
        }

        non_empty(url.query("v"))
    }

    pub fn extract_playlist_id(&self, url: &DecomposedUrl) -> Option<String> {
        non_empty(url.query("list"))
    }

    pub fn extract_shorts_id(&self, url: &DecomposedUrl) -> Option<String> {
        match url.segment(0) {
            Some("shorts") => non_empty(url.segment(1)),
            _ => None,
        }
    }
}

impl Classifier for YouTubeClassifier {
    fn name(&self) -> &'static str {
        "YouTube"
    }

    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn suitable(&self, url: &DecomposedUrl) -> bool {
        url.host_is("youtube.com") || url.host_is("youtu.be")
    }

    fn classify(&self, kind: ContentKind, url: &DecomposedUrl) -> LinkResult<Identifiers> {
        let ids = match kind {
            ContentKind::Video => self.extract_video_id(url).map(Identifiers::video),
            ContentKind::Playlist => self.extract_playlist_id(url).map(Identifiers::playlist),
            ContentKind::Shorts => self.extract_shorts_id(url).map(Identifiers::video),
            _ => None,
        };

        ids.ok_or(LinkError::MissingIdentifier { kind })
    }
}
