use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::questions::catalog::RoleCatalog;
use crate::questions::scraper::PageFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Model backend for résumé analysis and study plans. Default: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Page fetcher for the interview-question scraper. Default: `HttpPageFetcher`.
    pub fetcher: Arc<dyn PageFetcher>,
    pub roles: Arc<RoleCatalog>,
    pub config: Config,
}
