use std::sync::Arc;

use crate::cache::ProjectCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: patchup_db::DbPool,
    /// Server configuration (JWT secret, CORS, timeouts).
    pub config: Arc<ServerConfig>,
    /// Cached full-project snapshot the list filter runs against.
    pub projects: Arc<ProjectCache>,
    /// Bus for session and project lifecycle notifications.
    pub events: Arc<patchup_events::EventBus>,
}
