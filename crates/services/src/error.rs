//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use tracker_core::model::ScheduleError;

/// Errors emitted by `ScheduleService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScheduleServiceError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("failed to load schedule: {0}")]
    Schedule(#[from] ScheduleServiceError),
    #[error("failed to load progress: {0}")]
    Progress(#[from] ProgressServiceError),
}
