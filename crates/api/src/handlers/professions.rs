//! Handlers for the `/professions` resource.

use axum::extract::State;
use axum::Json;
use patchup_db::models::profession::Profession;
use patchup_db::repositories::ProfessionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/professions
///
/// The selectable role directory, ordered by title ascending. Used by both
/// the creation form and the list filter.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Profession>>>> {
    let professions = ProfessionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: professions }))
}
