//! Rejection of navigational pages for channel-shaped actions.
//!
//! Channel, recent-VOD, chat and Kick channel actions only make sense on a
//! bare `platform.tv/<channel>` link. Anything else is a platform page.

use crate::core::{DecomposedUrl, LinkError, LinkResult, Platform};

const TWITCH_RESERVED: &[&str] = &[
    "directory",
    "category",
    "settings",
    "subscriptions",
    "moderation",
    "p",
    "blog",
];

const KICK_RESERVED: &[&str] = &[
    "videos",
    "categories",
    "popular",
    "trending",
    "settings",
    "video",
    "category",
];

pub fn reserved_words(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Twitch => TWITCH_RESERVED,
        Platform::Kick => KICK_RESERVED,
        Platform::YouTube => &[],
    }
}

pub fn is_ignored(url: &DecomposedUrl, platform: Platform) -> bool {
    let segments = &url.path_segments;

    if platform == Platform::Twitch && segments.len() == 1 && segments[0] == "videos" {
        return true;
    }

    if segments.len() != 1 {
        return true;
    }

    let segment = segments[0].to_lowercase();
    reserved_words(platform)
        .iter()
        .any(|reserved| *reserved == segment)
}

/// Returns the channel name of a channel-root link, or `IgnoredPath`.
pub fn channel_root(url: &DecomposedUrl, platform: Platform) -> LinkResult<&str> {
    if is_ignored(url, platform) {
        tracing::debug!("Ignoring {} path {}", platform, url.path());
        return Err(LinkError::IgnoredPath {
            platform,
            path: url.path(),
        });
    }

    Ok(url.path_segments[0].as_str())
}
