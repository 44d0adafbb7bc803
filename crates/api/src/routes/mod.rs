pub mod auth;
pub mod health;
pub mod members;
pub mod professions;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/signup                 register + sign in (public)
/// /auth/login                  login (public)
/// /auth/refresh                refresh tokens (public)
/// /auth/logout                 revoke sessions (requires auth)
/// /auth/session                current user (requires auth)
///
/// /professions                 role directory (public)
///
/// /projects                    filtered list (public), create (auth)
/// /projects/{id}               assembled detail view (public)
/// /projects/{id}/photos        list (public), register (auth)
///
/// /members/me                  profile get, upsert (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/professions", professions::router())
        .nest("/projects", projects::router())
        .nest("/members", members::router())
}
