use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The full extraction pipeline; immutable after startup.
    pub analyzer: Arc<ResumeAnalyzer>,
}
