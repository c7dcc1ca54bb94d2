use crate::core::{LinkError, LinkResult};
use std::collections::HashMap;
use url::Url;

/// A link broken into the parts the classifiers look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedUrl {
    pub scheme: String,
    pub host: String,
    pub path_segments: Vec<String>,
    pub query_params: HashMap<String, String>,
}

impl DecomposedUrl {
    pub fn parse(input: &str) -> LinkResult<Self> {
        let url = Url::parse(input.trim())?;
        Self::from_url(&url)
    }

    pub fn from_url(url: &Url) -> LinkResult<Self> {
        let host = url
            .host_str()
            .ok_or_else(|| LinkError::MalformedUrl(format!("{} has no host", url)))?
            .to_ascii_lowercase();

        let path_segments = url
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(decode_segment)
            .collect();

        // Later duplicates overwrite earlier ones.
        let query_params = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            path_segments,
            query_params,
        })
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.path_segments.get(index).map(String::as_str)
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(String::as_str)
    }

    /// True when the host is `domain` itself or one of its subdomains.
    pub fn host_is(&self, domain: &str) -> bool {
        self.host == domain
            || self
                .host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    }

    pub fn path(&self) -> String {
        format!("/{}", self.path_segments.join("/"))
    }
}

/// Percent-decodes a path segment, keeping it raw if the bytes aren't UTF-8.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
