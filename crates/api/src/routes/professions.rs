//! Route definitions for the `/professions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::professions;
use crate::state::AppState;

/// Routes mounted at `/professions`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(professions::list))
}
