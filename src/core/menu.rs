//! Browser-style match patterns deciding which actions a link is offered.
//!
//! Patterns follow the WebExtension syntax: `<scheme>://<host><path>`, where
//! scheme `*` means http or https, host `*.example.com` covers the domain and
//! its subdomains, and `*` in the path (query included) matches anything.

use crate::core::{Action, ActionKind, LinkResult};
use anyhow::{bail, Result};
use regex::Regex;
use url::Url;

#[derive(Debug, Clone)]
pub struct MatchPattern {
    source: &'static str,
    regex: Regex,
}

impl MatchPattern {
    pub fn parse(source: &'static str) -> Result<Self> {
        let Some((scheme, rest)) = source.split_once("://") else {
            bail!("match pattern {:?} has no scheme", source);
        };
        let (host, path) = match rest.find('/') {
            Some(index) => rest.split_at(index),
            None => bail!("match pattern {:?} has no path", source),
        };

        let scheme = match scheme {
            "*" => "https?".to_string(),
            "http" | "https" => regex::escape(scheme),
            other => bail!("unsupported scheme {:?} in match pattern", other),
        };

        let host = if host == "*" {
            "[^/]+".to_string()
        } else if let Some(domain) = host.strip_prefix("*.") {
            format!(r"(?:[^/]*\.)?{}", regex::escape(domain))
        } else if host.contains('*') {
            bail!("wildcard must lead the host in match pattern {:?}", source);
        } else {
            regex::escape(host)
        };

        let path = path
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        let regex = Regex::new(&format!("^{}://{}{}$", scheme, host, path))?;
        Ok(Self { source, regex })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn matches(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };

        let mut target = format!("{}://{}{}", url.scheme(), host, url.path());
        if let Some(query) = url.query() {
            target.push('?');
            target.push_str(query);
        }

        self.regex.is_match(&target)
    }
}

/// Compiled patterns for every action kind.
pub struct MenuRegistry {
    entries: Vec<(ActionKind, Vec<MatchPattern>)>,
}

impl MenuRegistry {
    pub fn new() -> Result<Self> {
        let entries = ActionKind::ALL
            .into_iter()
            .map(|kind| -> Result<(ActionKind, Vec<MatchPattern>)> {
                let patterns = kind
                    .spec()
                    .patterns
                    .iter()
                    .map(|source| MatchPattern::parse(*source))
                    .collect::<Result<Vec<_>>>()?;
                Ok((kind, patterns))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Compiled patterns of one action kind, in declaration order.
    pub fn patterns(&self, kind: ActionKind) -> &[MatchPattern] {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == kind)
            .map(|(_, patterns)| patterns.as_slice())
            .unwrap_or_default()
    }

    /// Actions (both delivery modes) whose patterns match `link`.
    pub fn offered_actions(&self, link: &str) -> LinkResult<Vec<Action>> {
        let url = Url::parse(link.trim())?;

        let actions = self
            .entries
            .iter()
            .filter(|(_, patterns)| patterns.iter().any(|pattern| pattern.matches(&url)))
            .flat_map(|(kind, _)| {
                crate::core::DeliveryMode::ALL
                    .into_iter()
                    .map(move |delivery| Action::new(*kind, delivery))
            })
            .collect();

        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeliveryMode;

    fn offered(link: &str) -> Vec<ActionKind> {
        let registry = MenuRegistry::new().unwrap();
        registry
            .offered_actions(link)
            .unwrap()
            .into_iter()
            .filter(|action| action.delivery == DeliveryMode::Dispatch)
            .map(|action| action.kind)
            .collect()
    }

    #[test]
    fn test_all_static_patterns_compile() {
        assert!(MenuRegistry::new().is_ok());
    }

    #[test]
    fn test_pattern_matching() {
        let pattern = MatchPattern::parse("*://*.youtube.com/watch?v=*").unwrap();
        assert!(pattern.matches(&Url::parse("https://www.youtube.com/watch?v=abc").unwrap()));
        assert!(pattern.matches(&Url::parse("http://youtube.com/watch?v=abc").unwrap()));
        assert!(!pattern.matches(&Url::parse("https://www.youtube.com/watch?list=abc").unwrap()));
        assert!(!pattern.matches(&Url::parse("ftp://www.youtube.com/watch?v=abc").unwrap()));
        assert!(!pattern.matches(&Url::parse("https://notyoutube.com/watch?v=abc").unwrap()));
    }

    #[test]
    fn test_bad_patterns() {
        assert!(MatchPattern::parse("youtube.com/*").is_err());
        assert!(MatchPattern::parse("*://youtube.com").is_err());
        assert!(MatchPattern::parse("*://you*tube.com/*").is_err());
    }

    #[test]
    fn test_watch_link_with_playlist() {
        let kinds = offered("https://www.youtube.com/watch?v=abc&list=PL1");
        assert_eq!(
            kinds,
            vec![
                ActionKind::YouTubeVideo,
                ActionKind::YouTubePlaylist,
                ActionKind::YouTubePlaylistShuffled
            ]
        );
    }

    #[test]
    fn test_shorts_link() {
        assert_eq!(offered("https://www.youtube.com/shorts/xyz"), vec![ActionKind::YouTubeShorts]);
    }

    #[test]
    fn test_twitch_links() {
        let kinds = offered("https://www.twitch.tv/videos/999");
        assert!(kinds.contains(&ActionKind::TwitchDirectVod));
        assert!(kinds.contains(&ActionKind::TwitchChannel));
        assert!(!kinds.contains(&ActionKind::TwitchClipChannel));

        let kinds = offered("https://www.twitch.tv/somechan/clip/CID");
        assert!(kinds.contains(&ActionKind::TwitchClipChannel));
        assert!(!kinds.contains(&ActionKind::TwitchClipEmbed));

        let kinds = offered("https://clips.twitch.tv/embed?clip=CID");
        assert!(kinds.contains(&ActionKind::TwitchClipEmbed));
    }

    #[test]
    fn test_unrelated_link() {
        assert!(offered("https://example.com/somechannel").is_empty());
        assert_eq!(offered("https://kick.com/somechannel"), vec![ActionKind::KickChannel]);
    }

    #[test]
    fn test_patterns_keep_their_source() {
        let registry = MenuRegistry::new().unwrap();
        let sources: Vec<&str> = registry
            .patterns(ActionKind::YouTubeVideo)
            .iter()
            .map(MatchPattern::source)
            .collect();
        assert_eq!(sources, vec!["*://*.youtube.com/watch?v=*", "*://youtu.be/*"]);
    }

    #[test]
    fn test_both_deliveries_are_offered() {
        let registry = MenuRegistry::new().unwrap();
        let actions = registry.offered_actions("https://www.youtube.com/shorts/xyz").unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1].id(), "youtube-shorts-newtab");
    }
}
