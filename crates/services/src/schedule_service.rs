use std::sync::Arc;

use storage::repository::ScheduleSource;
use tokio::sync::OnceCell;
use tracing::info;
use tracker_core::model::Schedule;

use crate::error::ScheduleServiceError;

/// Loads the schedule once and serves the cached copy afterwards.
pub struct ScheduleService {
    source: Arc<dyn ScheduleSource>,
    cached: OnceCell<Arc<Schedule>>,
}

impl ScheduleService {
    #[must_use]
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self {
            source,
            cached: OnceCell::new(),
        }
    }

    /// Return the schedule, reading the source on first use.
    ///
    /// A failed read is not cached; the next call retries.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleServiceError::Storage` if the source cannot be read, or
    /// `ScheduleServiceError::Schedule` if a row is invalid.
    pub async fn schedule(&self) -> Result<Arc<Schedule>, ScheduleServiceError> {
        let schedule = self
            .cached
            .get_or_try_init(|| async {
                let rows = self.source.load_rows().await?;
                let schedule = Schedule::from_rows(rows)?;
                info!(
                    days = schedule.days().len(),
                    items = schedule.items().count(),
                    "Schedule loaded"
                );
                Ok::<_, ScheduleServiceError>(Arc::new(schedule))
            })
            .await?;
        Ok(Arc::clone(schedule))
    }
}
