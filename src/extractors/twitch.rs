use crate::core::ignore::channel_root;
use crate::core::{Classifier, ContentKind, DecomposedUrl, Identifiers, LinkError, LinkResult, Platform};
use crate::extractors::non_empty;

pub struct TwitchClassifier;

impl TwitchClassifier {
    /// `twitch.tv/videos/<id>`. Checked structurally, without the ignore filter.
    pub fn extract_vod_id(&self, url: &DecomposedUrl) -> Option<String> {
        match url.segment(0) {
            Some("videos") => non_empty(url.segment(1)),
            _ => None,
        }
    }

    /// Embedded clips (`clips.twitch.tv/embed?clip=<id>`) take precedence over
    /// channel clips (`twitch.tv/<channel>/clip/<id>`).
    pub fn extract_clip_id(&self, url: &DecomposedUrl) -> Option<String> {
        if url.host == "clips.twitch.tv" && url.path_segments == ["embed"] {
            if let Some(id) = non_empty(url.query("clip")) {
                return Some(id);
            }
        }

        if url.path_segments.len() >= 3 && url.path_segments[1] == "clip" {
            return non_empty(url.segment(2));
        }

        None
    }
}

impl Classifier for TwitchClassifier {
    fn name(&self) -> &'static str {
        "Twitch"
    }

    fn platform(&self) -> Platform {
        Platform::Twitch
    }

    fn suitable(&self, url: &DecomposedUrl) -> bool {
        url.host_is("twitch.tv")
    }

    fn classify(&self, kind: ContentKind, url: &DecomposedUrl) -> LinkResult<Identifiers> {
        let ids = match kind {
            ContentKind::DirectVod => self.extract_vod_id(url).map(Identifiers::vod),
            ContentKind::Clip => self.extract_clip_id(url).map(Identifiers::clip),
            // Same link shape for all three; the action picks which one is meant.
            ContentKind::Channel | ContentKind::RecentVod | ContentKind::Chat => {
                Some(Identifiers::channel(channel_root(url, Platform::Twitch)?))
            }
            _ => None,
        };

        ids.ok_or(LinkError::MissingIdentifier { kind })
    }
}
