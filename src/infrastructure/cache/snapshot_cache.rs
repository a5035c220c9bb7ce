//! Lazily-initialized, reloadable in-memory snapshot cache.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::domain::entities::{RawRow, RecordSnapshot};
use crate::error::DirectoryError;

/// Process-wide holder of the last successfully loaded [`RecordSnapshot`].
///
/// Explicitly constructed and owned by startup wiring, then shared by `Arc` —
/// there is no implicit global. First access loads once: racing callers block
/// on the load guard until the winner publishes the snapshot, so exactly one
/// load occurs and every caller observes the same `Arc`. Steady-state reads
/// take a non-exclusive read lock and never serialize against each other.
///
/// The snapshot is replaced wholesale by [`Self::reload`]; a published
/// snapshot is never mutated in place.
pub struct SnapshotCache {
    current: RwLock<Option<Arc<RecordSnapshot>>>,
    load_guard: Mutex<()>,
}

impl SnapshotCache {
    /// Creates an empty cache; nothing is loaded until first access.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            load_guard: Mutex::new(()),
        }
    }

    /// Returns the current snapshot, loading it via `load` on first access.
    ///
    /// Under concurrent first access, exactly one `load` future runs; the
    /// other callers wait and receive the same snapshot instance.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error. A failed load publishes nothing, so
    /// the next caller retries.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<RecordSnapshot>, DirectoryError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<RawRow>, DirectoryError>>,
    {
        if let Some(snapshot) = self.current.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let _guard = self.load_guard.lock().await;

        // A racing caller may have published while we waited for the guard.
        if let Some(snapshot) = self.current.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let rows = load().await?;
        let snapshot = Arc::new(RecordSnapshot::new(rows));
        tracing::debug!(rows = snapshot.len(), "snapshot cache populated");

        *self.current.write().await = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Replaces the snapshot wholesale with a fresh load.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error; the previous snapshot stays published
    /// when the reload fails.
    pub async fn reload<F, Fut>(&self, load: F) -> Result<Arc<RecordSnapshot>, DirectoryError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<RawRow>, DirectoryError>>,
    {
        let _guard = self.load_guard.lock().await;

        let rows = load().await?;
        let snapshot = Arc::new(RecordSnapshot::new(rows));
        tracing::info!(rows = snapshot.len(), "snapshot cache reloaded");

        *self.current.write().await = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Current snapshot, if one has been loaded. Never triggers a load.
    pub async fn snapshot(&self) -> Option<Arc<RecordSnapshot>> {
        self.current.read().await.as_ref().map(Arc::clone)
    }

    /// Drops the snapshot so the next access loads afresh.
    pub async fn invalidate(&self) {
        let _guard = self.load_guard.lock().await;
        *self.current.write().await = None;
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}
