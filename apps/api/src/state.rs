use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pluggable model backend. Production: `GeminiClient`.
    pub model: Arc<dyn ModelClient>,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn ModelClient>) -> Self {
        Self {
            config: Arc::new(config),
            model,
        }
    }
}
