use std::path::PathBuf;
use std::sync::Arc;

use storage::repository::Storage;
use tracing::warn;
use tracker_core::model::{ProgressStore, Schedule};

use crate::Clock;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::progress_view::stale_keys;
use crate::schedule_service::ScheduleService;

/// Assembles app-facing services and loads the startup state.
///
/// Both the schedule and persisted progress are read here so that a missing
/// schedule or a corrupt progress file fails before any window opens.
#[derive(Clone)]
pub struct AppServices {
    schedule: Arc<Schedule>,
    initial_progress: ProgressStore,
    progress_service: Arc<ProgressService>,
}

impl AppServices {
    /// Build services backed by CSV files.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the schedule or progress cannot be loaded.
    pub async fn new_csv(
        schedule_path: impl Into<PathBuf>,
        progress_path: impl Into<PathBuf>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        Self::bootstrap(Storage::csv(schedule_path, progress_path), clock).await
    }

    /// Build services over any storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the schedule or progress cannot be loaded.
    pub async fn bootstrap(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let schedule_service = ScheduleService::new(Arc::clone(&storage.schedule));
        let progress_service = Arc::new(ProgressService::new(clock, Arc::clone(&storage.progress)));

        let schedule = schedule_service.schedule().await?;
        let initial_progress = progress_service.load().await?;

        let stale = stale_keys(&schedule, &initial_progress).len();
        if stale > 0 {
            warn!(stale, "Progress has entries for items no longer in the schedule");
        }

        Ok(Self {
            schedule,
            initial_progress,
            progress_service,
        })
    }

    #[must_use]
    pub fn schedule(&self) -> Arc<Schedule> {
        Arc::clone(&self.schedule)
    }

    #[must_use]
    pub fn initial_progress(&self) -> &ProgressStore {
        &self.initial_progress
    }

    #[must_use]
    pub fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }
}
