use std::sync::Arc;

use crate::config::Config;
use crate::frameworks::catalog::Catalog;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable framework catalog, built once at startup.
    pub catalog: Arc<Catalog>,
    /// Completion backend. Default: `LlmClient`; tests swap in a stub.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
