use std::sync::Arc;

use crate::analysis_client::Analyzer;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL-backed in production, in-memory when no database is configured.
    pub store: Arc<dyn CandidateStore>,
    pub analyzer: Arc<dyn Analyzer>,
}
