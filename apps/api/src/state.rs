use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::fit_scoring::FitScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable fit scorer. Default: KeywordFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
}
