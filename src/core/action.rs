//! The context-menu actions and what each one asks for.

use crate::core::{ContentKind, DeliveryMode, LinkError, Modifiers, Platform};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const NEW_TAB_SUFFIX: &str = "-newtab";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionKind {
    YouTubeVideo,
    YouTubePlaylist,
    YouTubePlaylistShuffled,
    YouTubeShorts,
    TwitchDirectVod,
    TwitchChannel,
    TwitchVod,
    TwitchChat,
    TwitchClipChannel,
    TwitchClipEmbed,
    KickChannel,
}

/// Static description of one menu action.
#[derive(Debug, Clone, Copy)]
pub struct ActionSpec {
    pub id: &'static str,
    pub platform: Platform,
    pub content: ContentKind,
    pub modifiers: Modifiers,
    /// Menu label without the delivery suffix ("in Streamledge" / "in New Tab").
    pub label: &'static str,
    /// Browser match patterns restricting when the action is offered.
    pub patterns: &'static [&'static str],
}

const YOUTUBE_VIDEO_PATTERNS: &[&str] = &["*://*.youtube.com/watch?v=*", "*://youtu.be/*"];
const YOUTUBE_PLAYLIST_PATTERNS: &[&str] = &["*://*.youtube.com/watch?*list=*", "*://youtu.be/*"];
const YOUTUBE_SHORTS_PATTERNS: &[&str] = &["*://*.youtube.com/shorts/*"];
const TWITCH_VOD_PATTERNS: &[&str] = &["*://*.twitch.tv/videos/*"];
const TWITCH_ANY_PATTERNS: &[&str] = &["*://*.twitch.tv/*"];
const TWITCH_CLIP_CHANNEL_PATTERNS: &[&str] = &["*://*.twitch.tv/*/clip/*"];
const TWITCH_CLIP_EMBED_PATTERNS: &[&str] = &["*://clips.twitch.tv/embed?clip=*"];
const KICK_PATTERNS: &[&str] = &["*://*.kick.com/*"];

const PLAIN: Modifiers = Modifiers { shuffle: false };
const SHUFFLED: Modifiers = Modifiers { shuffle: true };

impl ActionKind {
    pub const ALL: [ActionKind; 11] = [
        ActionKind::YouTubeVideo,
        ActionKind::YouTubePlaylist,
        ActionKind::YouTubePlaylistShuffled,
        ActionKind::YouTubeShorts,
        ActionKind::TwitchDirectVod,
        ActionKind::TwitchChannel,
        ActionKind::TwitchVod,
        ActionKind::TwitchChat,
        ActionKind::TwitchClipChannel,
        ActionKind::TwitchClipEmbed,
        ActionKind::KickChannel,
    ];

    pub const fn spec(self) -> ActionSpec {
        use ContentKind::*;
        use Platform::*;

        let (id, platform, content, modifiers, label, patterns) = match self {
            ActionKind::YouTubeVideo => (
                "youtube-video",
                YouTube,
                Video,
                PLAIN,
                "Open Video",
                YOUTUBE_VIDEO_PATTERNS,
            ),
            ActionKind::YouTubePlaylist => (
                "youtube-playlist",
                YouTube,
                Playlist,
                PLAIN,
                "Open Playlist",
                YOUTUBE_PLAYLIST_PATTERNS,
            ),
            ActionKind::YouTubePlaylistShuffled => (
                "youtube-playlist-shuffled",
                YouTube,
                Playlist,
                SHUFFLED,
                "Shuffle Playlist",
                YOUTUBE_PLAYLIST_PATTERNS,
            ),
            ActionKind::YouTubeShorts => (
                "youtube-shorts",
                YouTube,
                Shorts,
                PLAIN,
                "Open Short",
                YOUTUBE_SHORTS_PATTERNS,
            ),
            ActionKind::TwitchDirectVod => (
                "twitch-direct-vod",
                Twitch,
                DirectVod,
                PLAIN,
                "Open Direct VOD",
                TWITCH_VOD_PATTERNS,
            ),
            ActionKind::TwitchChannel => (
                "twitch-channel",
                Twitch,
                Channel,
                PLAIN,
                "Open Live Stream",
                TWITCH_ANY_PATTERNS,
            ),
            ActionKind::TwitchVod => (
                "twitch-vod",
                Twitch,
                RecentVod,
                PLAIN,
                "Open Recent VOD",
                TWITCH_ANY_PATTERNS,
            ),
            ActionKind::TwitchChat => (
                "twitch-chat",
                Twitch,
                Chat,
                PLAIN,
                "Open Chat",
                TWITCH_ANY_PATTERNS,
            ),
            ActionKind::TwitchClipChannel => (
                "twitch-clip-channel",
                Twitch,
                Clip,
                PLAIN,
                "Open Clip",
                TWITCH_CLIP_CHANNEL_PATTERNS,
            ),
            ActionKind::TwitchClipEmbed => (
                "twitch-clip-embed",
                Twitch,
                Clip,
                PLAIN,
                "Open Clip",
                TWITCH_CLIP_EMBED_PATTERNS,
            ),
            ActionKind::KickChannel => (
                "kick-channel",
                Kick,
                Channel,
                PLAIN,
                "Open Channel",
                KICK_PATTERNS,
            ),
        };

        ActionSpec {
            id,
            platform,
            content,
            modifiers,
            label,
            patterns,
        }
    }
}

/// One invocable menu entry: what to open, and how to deliver it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub delivery: DeliveryMode,
}

impl Action {
    pub const fn new(kind: ActionKind, delivery: DeliveryMode) -> Self {
        Self { kind, delivery }
    }

    /// Every registered action, dispatch variant first.
    pub fn all() -> impl Iterator<Item = Action> {
        ActionKind::ALL.into_iter().flat_map(|kind| {
            DeliveryMode::ALL
                .into_iter()
                .map(move |delivery| Action::new(kind, delivery))
        })
    }

    pub fn spec(&self) -> ActionSpec {
        self.kind.spec()
    }

    pub fn platform(&self) -> Platform {
        self.kind.spec().platform
    }

    pub fn content(&self) -> ContentKind {
        self.kind.spec().content
    }

    pub fn modifiers(&self) -> Modifiers {
        self.kind.spec().modifiers
    }

    pub fn id(&self) -> String {
        let base = self.kind.spec().id;
        match self.delivery {
            DeliveryMode::Dispatch => base.to_string(),
            DeliveryMode::NewTab => format!("{}{}", base, NEW_TAB_SUFFIX),
        }
    }

    pub fn title(&self) -> String {
        let label = self.kind.spec().label;
        match self.delivery {
            DeliveryMode::Dispatch => format!("{} in Streamledge", label),
            DeliveryMode::NewTab => format!("{} in New Tab", label),
        }
    }
}

impl FromStr for Action {
    type Err = LinkError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Action::all()
            .find(|action| action.id() == id)
            .ok_or_else(|| LinkError::UnknownAction(id.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
