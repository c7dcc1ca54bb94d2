use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    Twitch,
    Kick,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Twitch => "twitch",
            Platform::Kick => "kick",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Video,
    Playlist,
    Shorts,
    Channel,
    DirectVod,
    RecentVod,
    Chat,
    Clip,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Video => "video",
            ContentKind::Playlist => "playlist",
            ContentKind::Shorts => "shorts",
            ContentKind::Channel => "channel",
            ContentKind::DirectVod => "direct VOD",
            ContentKind::RecentVod => "recent VOD",
            ContentKind::Chat => "chat",
            ContentKind::Clip => "clip",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Dispatch,
    NewTab,
}

impl DeliveryMode {
    pub const ALL: [DeliveryMode; 2] = [DeliveryMode::Dispatch, DeliveryMode::NewTab];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shuffle: bool,
}

/// Whatever ids a classifier could pull out of a link. Only the fields that
/// matter for the requested [`ContentKind`] are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    pub video_id: Option<String>,
    pub playlist_id: Option<String>,
    pub clip_id: Option<String>,
    pub vod_id: Option<String>,
    pub channel_name: Option<String>,
}

impl Identifiers {
    pub fn video(id: impl Into<String>) -> Self {
        Self {
            video_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn playlist(id: impl Into<String>) -> Self {
        Self {
            playlist_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn clip(id: impl Into<String>) -> Self {
        Self {
            clip_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn vod(id: impl Into<String>) -> Self {
        Self {
            vod_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn channel(name: impl Into<String>) -> Self {
        Self {
            channel_name: Some(name.into()),
            ..Self::default()
        }
    }
}
