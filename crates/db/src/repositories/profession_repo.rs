//! Repository for the `professions` table.

use patchup_core::types::DbId;
use sqlx::PgPool;

use crate::models::profession::Profession;

/// Read-only access to the profession directory.
pub struct ProfessionRepo;

impl ProfessionRepo {
    /// List all professions ordered by title ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Profession>, sqlx::Error> {
        sqlx::query_as::<_, Profession>(
            "SELECT id, title FROM professions ORDER BY title ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Fetch the professions with the given ids, in no particular order.
    ///
    /// Callers that care about order (the detail assembler) reorder the
    /// result against the project's `roles_required` sequence.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Profession>, sqlx::Error> {
        sqlx::query_as::<_, Profession>("SELECT id, title FROM professions WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
