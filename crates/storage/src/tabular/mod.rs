use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::repository::{ProgressRepository, ScheduleSource, Storage, StorageError};

mod mapping;
mod progress_file;
mod schedule_file;

pub use mapping::{COMPLETED_COLUMN, DAY_COLUMN, KEY_COLUMN, LECTURE_COLUMN, PROJECT_COLUMN};

/// Schedule table stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvScheduleSource {
    path: PathBuf,
}

impl CsvScheduleSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Progress table stored as a CSV file with `Key,Completed` columns.
#[derive(Debug, Clone)]
pub struct CsvProgressRepository {
    path: PathBuf,
}

impl CsvProgressRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage {
    /// Build a `Storage` backed by CSV files.
    ///
    /// Nothing is read until the repositories are used.
    #[must_use]
    pub fn csv(schedule_path: impl Into<PathBuf>, progress_path: impl Into<PathBuf>) -> Self {
        let schedule: Arc<dyn ScheduleSource> = Arc::new(CsvScheduleSource::new(schedule_path));
        let progress: Arc<dyn ProgressRepository> =
            Arc::new(CsvProgressRepository::new(progress_path));
        Self { schedule, progress }
    }
}

fn io_error(path: &Path, err: &std::io::Error) -> StorageError {
    StorageError::Io(format!("{}: {err}", path.display()))
}

fn malformed(path: &Path, err: impl std::fmt::Display) -> StorageError {
    StorageError::Malformed(format!("{}: {err}", path.display()))
}
