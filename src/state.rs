use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::sizing::SearchEngine;

/// Shared application state passed to all API handlers via axum's State extractor.
///
/// Everything here is read-only once the server starts.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
    pub(crate) engine: SearchEngine,
    pub(crate) started_at: DateTime<Utc>,
}

impl AppState {
    pub(crate) fn new(config: AppConfig, engine: SearchEngine) -> Self {
        Self { config, engine, started_at: Utc::now() }
    }
}
