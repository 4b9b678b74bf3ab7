use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation collaborator. Shared by all in-flight requests and
    /// swapped for a deterministic fake in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
