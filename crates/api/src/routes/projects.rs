//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /               -> list (filtered)
/// POST /               -> create
/// GET  /{id}           -> get_detail
/// GET  /{id}/photos    -> list_photos
/// POST /{id}/photos    -> create_photo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route("/{id}", get(projects::get_detail))
        .route(
            "/{id}/photos",
            get(projects::list_photos).post(projects::create_photo),
        )
}
