//! Route definitions for the `/members` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::members;
use crate::state::AppState;

/// Routes mounted at `/members`.
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(members::get_me).put(members::upsert_me))
}
