pub mod kick;
pub mod twitch;
pub mod youtube;

pub use kick::KickClassifier;
pub use twitch::TwitchClassifier;
pub use youtube::YouTubeClassifier;

/// Treats an empty string the same as an absent value.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
