#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod progress_view;
pub mod schedule_service;

pub use tracker_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError, ScheduleServiceError};
pub use progress_service::{ProgressService, SaveReceipt};
pub use progress_view::{DayProgress, ProgressOverview, stale_keys};
pub use schedule_service::ScheduleService;
