use std::sync::Arc;

use crate::provider::TextGenerator;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generative-text backend. Production: `OpenAiGenerator`.
    /// Tests swap in a mock without touching any handler code.
    pub generator: Arc<dyn TextGenerator>,
}
