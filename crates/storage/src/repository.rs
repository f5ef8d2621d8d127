use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracker_core::model::{ProgressStore, ScheduleRow};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("missing column `{column}` in {source_name}")]
    MissingColumn {
        column: &'static str,
        source_name: String,
    },

    #[error("malformed data: {0}")]
    Malformed(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

/// Read-only source of schedule rows.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Load every schedule row in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the source is missing, or
    /// `StorageError::MissingColumn`/`StorageError::Malformed` if it cannot be read.
    async fn load_rows(&self) -> Result<Vec<ScheduleRow>, StorageError>;
}

/// Repository contract for persisted completion state.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load persisted progress.
    ///
    /// A missing resource is not an error and yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` or `StorageError::MissingColumn` if
    /// the persisted data cannot be parsed, or `StorageError::Io` on read failures.
    async fn load_progress(&self) -> Result<ProgressStore, StorageError>;

    /// Overwrite persisted progress with the full store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn save_progress(&self, store: &ProgressStore) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    rows: Arc<Mutex<Vec<ScheduleRow>>>,
    progress: Arc<Mutex<Option<ProgressStore>>>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rows(rows: Vec<ScheduleRow>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            ..Self::default()
        }
    }

    /// Number of completed `save_progress` calls.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Acquire)
    }

    /// The last saved store, if any.
    #[must_use]
    pub fn saved(&self) -> Option<ProgressStore> {
        self.progress.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl ScheduleSource for InMemoryRepository {
    async fn load_rows(&self) -> Result<Vec<ScheduleRow>, StorageError> {
        let guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_progress(&self) -> Result<ProgressStore, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(guard.clone().unwrap_or_default())
    }

    async fn save_progress(&self, store: &ProgressStore) -> Result<(), StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        *guard = Some(store.clone());
        self.saves.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

/// Aggregates schedule and progress repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub schedule: Arc<dyn ScheduleSource>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let schedule: Arc<dyn ScheduleSource> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { schedule, progress }
    }
}
