//! Handlers for the `/members/me` resource.

use axum::extract::State;
use axum::Json;
use patchup_core::error::CoreError;
use patchup_core::member::{MemberDraft, DEFAULT_MEMBER_ROLE};
use patchup_core::types::DbId;
use patchup_db::models::member::{Member, UpsertMember};
use patchup_db::repositories::{MemberRepo, UserRepo};
use patchup_events::DomainEvent;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /members/me`.
#[derive(Debug, Deserialize)]
pub struct SaveMemberRequest {
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub profession_id: Option<DbId>,
    pub age: Option<i32>,
    pub area: Option<String>,
}

/// Profile view returned by `GET /members/me`.
///
/// When no profile row exists yet this is a blank draft seeded with the
/// account email, so a first-time visitor gets an editable default rather
/// than a 404.
#[derive(Debug, Serialize)]
pub struct MemberProfile {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub profession_id: Option<DbId>,
    pub age: Option<i32>,
    pub area: Option<String>,
    /// False when this is a not-yet-saved default draft.
    pub saved: bool,
}

impl From<Member> for MemberProfile {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            email: member.email,
            name: member.name,
            role: member.role,
            profession_id: member.profession_id,
            age: member.age,
            area: member.area,
            saved: true,
        }
    }
}

/// GET /api/v1/members/me
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<MemberProfile>> {
    if let Some(member) = MemberRepo::find_by_id(&state.pool, auth_user.user_id).await? {
        return Ok(Json(member.into()));
    }

    // No profile yet; seed a blank draft from the auth identity.
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(MemberProfile {
        id: user.id,
        email: user.email,
        name: None,
        role: DEFAULT_MEMBER_ROLE.to_string(),
        profession_id: None,
        age: None,
        area: None,
        saved: false,
    }))
}

/// PUT /api/v1/members/me
///
/// Idempotent insert-or-update keyed by the authenticated user's id:
/// saving the same draft twice produces the same stored state.
pub async fn upsert_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<SaveMemberRequest>,
) -> AppResult<Json<MemberProfile>> {
    let draft = MemberDraft {
        email: input.email,
        name: input.name,
        role: input.role,
        profession_id: input.profession_id,
        age: input.age,
        area: input.area,
    }
    .normalize();
    draft.validate().map_err(AppError::Core)?;

    let role = draft
        .role
        .unwrap_or_else(|| DEFAULT_MEMBER_ROLE.to_string());

    let member = MemberRepo::upsert(
        &state.pool,
        auth_user.user_id,
        &UpsertMember {
            email: draft.email,
            name: draft.name,
            role,
            profession_id: draft.profession_id,
            age: draft.age,
            area: draft.area,
        },
    )
    .await?;

    state
        .events
        .publish(DomainEvent::member_saved(member.id));

    Ok(Json(member.into()))
}
