use crate::core::{
    build_request, Action, ClassifierEngine, DecomposedUrl, LinkError, LinkResult, RequestDescriptor,
};
use tracing::{debug, info};

/// Turns an (action id, link) pair into a request descriptor.
///
/// Resolution is a pure function of its inputs: no state is kept between
/// calls.
pub struct LinkResolver {
    engine: ClassifierEngine,
}

impl LinkResolver {
    pub fn new() -> Self {
        Self::with_engine(ClassifierEngine::with_defaults())
    }

    pub fn with_engine(engine: ClassifierEngine) -> Self {
        Self { engine }
    }

    pub fn resolve(&self, action_id: &str, link: &str) -> LinkResult<RequestDescriptor> {
        let action: Action = action_id.parse()?;
        self.resolve_action(action, link)
    }

    pub fn resolve_action(&self, action: Action, link: &str) -> LinkResult<RequestDescriptor> {
        let url = DecomposedUrl::parse(link)?;
        let spec = action.spec();

        let classifier = self
            .engine
            .classifier_for(spec.platform)
            .ok_or(LinkError::MissingIdentifier { kind: spec.content })?;

        debug!(
            "Classifying {} as {} with {} classifier",
            link,
            spec.content,
            classifier.name()
        );
        let ids = classifier.classify(spec.content, &url)?;
        debug!("Extracted identifiers: {:?}", ids);

        let (endpoint_path, query) = build_request(spec.platform, spec.content, &ids, spec.modifiers)?;
        let descriptor = RequestDescriptor {
            endpoint_path,
            query,
            delivery_mode: action.delivery,
        };

        info!("{} resolved to {}", action, descriptor.endpoint());
        Ok(descriptor)
    }

    /// Like [`resolve`](Self::resolve), but swallows the reason: a click that
    /// yields nothing just does nothing.
    pub fn resolve_silently(&self, action_id: &str, link: &str) -> Option<RequestDescriptor> {
        match self.resolve(action_id, link) {
            Ok(descriptor) => Some(descriptor),
            Err(err) => {
                debug!("No request for {} on {}: {}", action_id, link, err);
                None
            }
        }
    }
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::new()
    }
}
