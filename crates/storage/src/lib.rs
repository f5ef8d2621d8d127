#![forbid(unsafe_code)]

pub mod repository;
pub mod tabular;

pub use repository::{ProgressRepository, ScheduleSource, Storage, StorageError};
