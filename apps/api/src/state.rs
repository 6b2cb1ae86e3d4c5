use std::sync::Arc;

use crate::llm_client::AnalysisGenerator;
use crate::survey::catalog::QuestionCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable question catalog, built once at startup.
    pub catalog: Arc<QuestionCatalog>,
    /// Narrative generator. Production: `LlmClient`; tests swap in a scripted mock.
    pub llm: Arc<dyn AnalysisGenerator>,
}
