use crate::core::{ContentKind, DeliveryMode, Identifiers, LinkError, LinkResult, Modifiers, Platform};
use serde::Serialize;

/// Query parameter telling the viewer service it was invoked from a click.
pub const DISPATCH_MARKER: (&str, &str) = ("runStreamledge", "1");

/// The endpoint and query a click resolves to, plus how to deliver it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    pub endpoint_path: String,
    pub query: Vec<(String, String)>,
    pub delivery_mode: DeliveryMode,
}

impl RequestDescriptor {
    pub fn query_string(&self) -> String {
        crate::utils::encode_query(&self.query)
    }

    /// Path and query as sent to the viewer service, e.g. `youtube?id=abc`.
    pub fn endpoint(&self) -> String {
        format!("{}?{}", self.endpoint_path, self.query_string())
    }

    /// Full local URL. Dispatched requests carry the marker parameter, new
    /// tabs do not.
    pub fn local_url(&self, host: &str, port: u16) -> String {
        let mut url = format!("http://{}:{}/{}", host, port, self.endpoint());
        if self.delivery_mode == DeliveryMode::Dispatch {
            let (key, value) = DISPATCH_MARKER;
            url.push_str(&format!("&{}={}", key, value));
        }
        url
    }
}

/// Maps the classified content to its endpoint and query parameters.
pub fn build_request(
    platform: Platform,
    kind: ContentKind,
    ids: &Identifiers,
    modifiers: Modifiers,
) -> LinkResult<(String, Vec<(String, String)>)> {
    let require = |field: &Option<String>| -> LinkResult<String> {
        field
            .clone()
            .ok_or(LinkError::MissingIdentifier { kind })
    };
    let pair = |key: &str, value: String| (key.to_string(), value);

    let (endpoint, query) = match (platform, kind) {
        (Platform::YouTube, ContentKind::Video | ContentKind::Shorts) => {
            ("youtube", vec![pair("id", require(&ids.video_id)?)])
        }
        (Platform::YouTube, ContentKind::Playlist) => {
            let mut query = vec![pair("id", require(&ids.playlist_id)?)];
            if modifiers.shuffle {
                query.push(pair("shuffle", "1".to_string()));
            }
            ("youtube", query)
        }
        (Platform::Twitch, ContentKind::Channel) => {
            ("twitch", vec![pair("channel", require(&ids.channel_name)?)])
        }
        (Platform::Twitch, ContentKind::RecentVod) => (
            "twitch",
            vec![
                pair("channel", require(&ids.channel_name)?),
                pair("contentType", "vod".to_string()),
            ],
        ),
        (Platform::Twitch, ContentKind::Chat) => (
            "twitch",
            vec![
                pair("channel", require(&ids.channel_name)?),
                pair("contentType", "chat".to_string()),
            ],
        ),
        (Platform::Twitch, ContentKind::DirectVod) => (
            "twitch",
            vec![
                pair("contentType", "vodid".to_string()),
                pair("vodid", require(&ids.vod_id)?),
            ],
        ),
        (Platform::Twitch, ContentKind::Clip) => ("clip", vec![pair("id", require(&ids.clip_id)?)]),
        (Platform::Kick, ContentKind::Channel) => {
            ("kick", vec![pair("channel", require(&ids.channel_name)?)])
        }
        _ => return Err(LinkError::MissingIdentifier { kind }),
    };

    Ok((endpoint.to_string(), query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(platform: Platform, kind: ContentKind, ids: Identifiers, shuffle: bool) -> String {
        let (endpoint, query) = build_request(platform, kind, &ids, Modifiers { shuffle }).unwrap();
        format!("{}?{}", endpoint, crate::utils::encode_query(&query))
    }

    #[test]
    fn test_endpoint_table() {
        use ContentKind::*;
        use Platform::*;

        assert_eq!(rendered(YouTube, Video, Identifiers::video("abc"), false), "youtube?id=abc");
        assert_eq!(rendered(YouTube, Shorts, Identifiers::video("s1"), false), "youtube?id=s1");
        assert_eq!(rendered(YouTube, Playlist, Identifiers::playlist("PL1"), false), "youtube?id=PL1");
        assert_eq!(
            rendered(YouTube, Playlist, Identifiers::playlist("PL1"), true),
            "youtube?id=PL1&shuffle=1"
        );
        assert_eq!(rendered(Twitch, Channel, Identifiers::channel("chan"), false), "twitch?channel=chan");
        assert_eq!(
            rendered(Twitch, RecentVod, Identifiers::channel("chan"), false),
            "twitch?channel=chan&contentType=vod"
        );
        assert_eq!(
            rendered(Twitch, Chat, Identifiers::channel("chan"), false),
            "twitch?channel=chan&contentType=chat"
        );
        assert_eq!(
            rendered(Twitch, DirectVod, Identifiers::vod("999"), false),
            "twitch?contentType=vodid&vodid=999"
        );
        assert_eq!(rendered(Twitch, Clip, Identifiers::clip("C1"), false), "clip?id=C1");
        assert_eq!(rendered(Kick, Channel, Identifiers::channel("chan"), false), "kick?channel=chan");
    }

    #[test]
    fn test_shuffle_is_ignored_outside_playlists() {
        assert_eq!(
            rendered(Platform::YouTube, ContentKind::Video, Identifiers::video("abc"), true),
            "youtube?id=abc"
        );
    }

    #[test]
    fn test_missing_identifier() {
        // A playlist id does not satisfy a video request.
        let err = build_request(
            Platform::YouTube,
            ContentKind::Video,
            &Identifiers::playlist("PL1"),
            Modifiers::default(),
        )
        .unwrap_err();
        assert_eq!(err, LinkError::MissingIdentifier { kind: ContentKind::Video });
    }

    #[test]
    fn test_unsupported_combination() {
        assert!(build_request(
            Platform::Kick,
            ContentKind::Chat,
            &Identifiers::channel("chan"),
            Modifiers::default(),
        )
        .is_err());
    }

    #[test]
    fn test_local_urls() {
        let descriptor = RequestDescriptor {
            endpoint_path: "youtube".to_string(),
            query: vec![("id".to_string(), "abc".to_string())],
            delivery_mode: DeliveryMode::Dispatch,
        };
        assert_eq!(
            descriptor.local_url("localhost", 5008),
            "http://localhost:5008/youtube?id=abc&runStreamledge=1"
        );

        let descriptor = RequestDescriptor {
            delivery_mode: DeliveryMode::NewTab,
            ..descriptor
        };
        assert_eq!(
            descriptor.local_url("localhost", 5008),
            "http://localhost:5008/youtube?id=abc"
        );
    }
}
