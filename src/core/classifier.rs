use crate::core::{ContentKind, DecomposedUrl, Identifiers, LinkResult, Platform};

/// Pulls content identifiers out of a link for one platform.
pub trait Classifier: Send + Sync {
    fn name(&self) -> &'static str;
    fn platform(&self) -> Platform;
    /// Whether the link's host belongs to this platform. Informational only:
    /// the invoked action, not the host, decides which classifier runs.
    fn suitable(&self, url: &DecomposedUrl) -> bool;
    fn classify(&self, kind: ContentKind, url: &DecomposedUrl) -> LinkResult<Identifiers>;
}

pub struct ClassifierEngine {
    pub classifiers: Vec<Box<dyn Classifier>>,
}

impl ClassifierEngine {
    pub fn new() -> Self {
        Self {
            classifiers: Vec::new(),
        }
    }

    /// Engine with the YouTube, Twitch and Kick classifiers registered.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.register_classifier(Box::new(crate::extractors::YouTubeClassifier));
        engine.register_classifier(Box::new(crate::extractors::TwitchClassifier));
        engine.register_classifier(Box::new(crate::extractors::KickClassifier));
        engine
    }

    pub fn register_classifier(&mut self, classifier: Box<dyn Classifier>) {
        self.classifiers.push(classifier);
    }

    pub fn classifier_for(&self, platform: Platform) -> Option<&dyn Classifier> {
        self.classifiers
            .iter()
            .find(|classifier| classifier.platform() == platform)
            .map(|classifier| &**classifier)
    }
}

impl Default for ClassifierEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
