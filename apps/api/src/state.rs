use std::sync::Arc;

use crate::config::Config;
use crate::history::store::HistoryStore;
use crate::layout::TextMeasurer;
use crate::preferences::store::PreferenceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text history. Default: Postgres-backed `PgHistoryStore`.
    pub history: Arc<dyn HistoryStore>,
    /// User preferences. Default: Redis-backed `RedisPreferenceStore`.
    pub preferences: Arc<dyn PreferenceStore>,
    /// Measurement backend for the fit engine. Default: static font-metric tables.
    pub measurer: Arc<dyn TextMeasurer>,
    pub config: Config,
}
