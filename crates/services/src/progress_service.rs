use std::sync::Arc;

use chrono::{DateTime, Utc};
use storage::repository::ProgressRepository;
use tokio::sync::Mutex;
use tracing::{debug, info};
use tracker_core::model::{ItemKey, ProgressStore};

use crate::Clock;
use crate::error::ProgressServiceError;

/// Outcome of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReceipt {
    pub saved_at: DateTime<Utc>,
    pub entries: usize,
}

/// Orchestrates loading, mutating, and persisting completion state.
///
/// The store itself is owned by the caller; this service only moves it to and
/// from the repository. Saves are serialized so writes land in call order.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    repo: Arc<dyn ProgressRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            clock,
            repo,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load persisted progress, or an empty store if none was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if persisted progress is unreadable.
    pub async fn load(&self) -> Result<ProgressStore, ProgressServiceError> {
        let store = self.repo.load_progress().await?;
        info!(entries = store.len(), "Progress loaded");
        Ok(store)
    }

    /// Persist the whole store, replacing prior content.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the write fails.
    pub async fn save(&self, store: &ProgressStore) -> Result<SaveReceipt, ProgressServiceError> {
        let _guard = self.write_lock.lock().await;
        self.repo.save_progress(store).await?;
        let receipt = SaveReceipt {
            saved_at: self.clock.now(),
            entries: store.len(),
        };
        debug!(entries = receipt.entries, "Progress saved");
        Ok(receipt)
    }

    /// Mark one item, then save a snapshot of the store.
    ///
    /// The store is updated before this returns. The returned future owns the
    /// snapshot, so it can be spawned while the caller keeps using the store.
    /// A failed save leaves the in-memory change in place.
    pub fn set_completed(
        &self,
        store: &mut ProgressStore,
        key: ItemKey,
        completed: bool,
    ) -> impl Future<Output = Result<SaveReceipt, ProgressServiceError>> + Send + use<> {
        debug!(%key, completed, "Item toggled");
        store.set(key, completed);
        self.save_snapshot(store.clone())
    }

    /// Clear all progress, then save the empty store.
    pub fn reset(
        &self,
        store: &mut ProgressStore,
    ) -> impl Future<Output = Result<SaveReceipt, ProgressServiceError>> + Send + use<> {
        info!(cleared = store.len(), "Progress reset");
        store.reset();
        self.save_snapshot(store.clone())
    }

    fn save_snapshot(
        &self,
        snapshot: ProgressStore,
    ) -> impl Future<Output = Result<SaveReceipt, ProgressServiceError>> + Send + use<> {
        let service = self.clone();
        async move { service.save(&snapshot).await }
    }
}
