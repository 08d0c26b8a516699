use std::sync::Arc;

use crate::config::Config;
use crate::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-side datastore. Default: `PgStore`; handler tests swap in `MemoryStore`.
    pub store: Arc<dyn PortfolioStore>,
    pub config: Config,
}
