//! Cached full-project snapshot.
//!
//! The list endpoint filters an in-memory snapshot instead of re-querying
//! the database on every filter change. The snapshot is loaded lazily on
//! first use and dropped whenever a mutation (project creation) lands, so
//! the next list request refetches.

use std::sync::Arc;

use patchup_db::models::project::Project;
use patchup_db::repositories::ProjectRepo;
use patchup_db::DbPool;
use tokio::sync::RwLock;

/// Lazily-loaded, invalidate-on-write snapshot of all projects.
///
/// Readers share one `Arc<Vec<Project>>`; a snapshot handed out stays
/// valid for the duration of the request even if the cache is invalidated
/// concurrently.
#[derive(Default)]
pub struct ProjectCache {
    inner: RwLock<Option<Arc<Vec<Project>>>>,
}

impl ProjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot, loading it from the database on a miss.
    ///
    /// A failed load leaves the cache empty and surfaces the error to the
    /// caller; no partial results are cached.
    pub async fn snapshot(&self, pool: &DbPool) -> Result<Arc<Vec<Project>>, sqlx::Error> {
        if let Some(snapshot) = self.inner.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let mut guard = self.inner.write().await;
        // Another writer may have loaded while we waited for the lock.
        if let Some(snapshot) = guard.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let projects = ProjectRepo::list(pool).await?;
        tracing::debug!(count = projects.len(), "project snapshot loaded");
        let snapshot = Arc::new(projects);
        *guard = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the snapshot so the next read refetches.
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }
}
