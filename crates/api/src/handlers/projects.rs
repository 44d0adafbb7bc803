//! Handlers for the `/projects` resource: filtered listing, creation, the
//! assembled detail view, and photo entries.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use patchup_core::error::CoreError;
use patchup_core::filter::filter_projects;
use patchup_core::project::{parse_tool_list, resolve_role_titles, ProjectDraft};
use patchup_core::types::DbId;
use patchup_db::models::photo_entry::{CreatePhotoEntry, PhotoEntry};
use patchup_db::models::project::{CreateProject, Project};
use patchup_db::repositories::{PhotoRepo, ProfessionRepo, ProjectRepo};
use patchup_events::DomainEvent;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ProjectListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub location: String,
    pub category: String,
    pub details: Option<String>,
    #[serde(default)]
    pub tools_needed: Option<ToolsInput>,
    #[serde(default)]
    pub roles_required: Vec<DbId>,
}

/// Tools accepted either as a list or as the raw comma-separated string the
/// creation form submits.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ToolsInput {
    List(Vec<String>),
    Raw(String),
}

impl ToolsInput {
    fn into_tools(self) -> Vec<String> {
        match self {
            ToolsInput::List(tools) => tools,
            ToolsInput::Raw(raw) => parse_tool_list(&raw),
        }
    }
}

/// Assembled detail view: the project row, its role titles in canonical
/// order, and its photos ordered oldest first.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub role_titles: Vec<String>,
    pub photos: Vec<PhotoEntry>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects?q=&roles=&tool=
///
/// Lists projects newest first, filtered in memory against the cached
/// snapshot. Inactive criteria leave the result unconstrained; a failed
/// snapshot load yields an error payload and no results.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let snapshot = state.projects.snapshot(&state.pool).await?;
    let filter = params.into_filter();

    let data: Vec<Project> = filter_projects(&snapshot, &filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/projects
///
/// Validates the draft locally before any insert: a draft with no required
/// roles is rejected without touching the database.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let draft = ProjectDraft {
        name: input.name,
        location: input.location,
        category: input.category,
        details: input.details,
        tools_needed: input
            .tools_needed
            .map(ToolsInput::into_tools)
            .unwrap_or_default(),
        roles_required: input.roles_required,
    }
    .normalize();
    draft.validate().map_err(AppError::Core)?;

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            name: draft.name,
            location: draft.location,
            category: draft.category,
            details: draft.details,
            tools_needed: draft.tools_needed,
            roles_required: draft.roles_required,
            created_by: Some(auth_user.user_id),
        },
    )
    .await?;

    // The cached list snapshot no longer reflects the store.
    state.projects.invalidate().await;
    state
        .events
        .publish(DomainEvent::project_created(project.id, auth_user.user_id));

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects/{id}
///
/// The detail assembler: the primary row decides found/not-found; the role
/// and photo fetches run concurrently once it resolves. Role titles are
/// reordered to the project's `roles_required` sequence, with unresolved
/// ids dropped.
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let (professions, photos) = tokio::join!(
        async {
            if project.roles_required.is_empty() {
                Ok(Vec::new())
            } else {
                ProfessionRepo::find_by_ids(&state.pool, &project.roles_required).await
            }
        },
        PhotoRepo::list_by_project(&state.pool, id),
    );

    let fetched: Vec<(DbId, String)> = professions?
        .into_iter()
        .map(|p| (p.id, p.title))
        .collect();
    let role_titles = resolve_role_titles(&project.roles_required, &fetched);

    Ok(Json(ProjectDetail {
        project,
        role_titles,
        photos: photos?,
    }))
}

/// GET /api/v1/projects/{id}/photos
pub async fn list_photos(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PhotoEntry>>>> {
    ensure_project_exists(&state, id).await?;
    let photos = PhotoRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// POST /api/v1/projects/{id}/photos
///
/// Register a stored photo path against a project. Blob upload itself is
/// handled out of band.
pub async fn create_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    _auth_user: AuthUser,
    Json(input): Json<CreatePhotoEntry>,
) -> AppResult<(StatusCode, Json<PhotoEntry>)> {
    if input.photo_path.trim().is_empty() {
        return Err(AppError::Core(CoreError::validation(
            "A photo path is required.",
        )));
    }

    ensure_project_exists(&state, id).await?;
    let photo = PhotoRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

/// 404 unless a project row with the given id exists.
async fn ensure_project_exists(state: &AppState, id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}
