//! Repository for the `members` table.

use patchup_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{Member, UpsertMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, role, profession_id, age, area, created_at, updated_at";

/// Provides profile read and upsert operations.
pub struct MemberRepo;

impl MemberRepo {
    /// Find a member profile by id (= owning user id).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Idempotent insert-or-update keyed by member id.
    ///
    /// Saving the same input twice yields the same stored state; concurrent
    /// saves from two sessions are last-write-wins.
    pub async fn upsert(
        pool: &PgPool,
        id: DbId,
        input: &UpsertMember,
    ) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (id, email, name, role, profession_id, age, area)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                name = EXCLUDED.name,
                role = EXCLUDED.role,
                profession_id = EXCLUDED.profession_id,
                age = EXCLUDED.age,
                area = EXCLUDED.area,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.role)
            .bind(input.profession_id)
            .bind(input.age)
            .bind(&input.area)
            .fetch_one(pool)
            .await
    }
}
