use tracker_core::model::{ItemKey, ProgressStore, Schedule};
use tracker_core::progress::{Completion, day_schedule_completion, overall_completion};

/// Completion for one scheduled day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayProgress {
    pub day: String,
    pub completion: Completion,
}

/// Per-day and overall completion, in schedule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressOverview {
    pub days: Vec<DayProgress>,
    pub overall: Completion,
}

impl ProgressOverview {
    #[must_use]
    pub fn build(schedule: &Schedule, store: &ProgressStore) -> Self {
        let days = schedule
            .days()
            .iter()
            .map(|day| DayProgress {
                day: day.day().to_owned(),
                completion: day_schedule_completion(day, store),
            })
            .collect();
        Self {
            days,
            overall: overall_completion(schedule, store),
        }
    }

    #[must_use]
    pub fn day(&self, day: &str) -> Option<&DayProgress> {
        self.days.iter().find(|d| d.day == day)
    }
}

/// Keys in the store that match no item of the current schedule.
#[must_use]
pub fn stale_keys<'a>(schedule: &Schedule, store: &'a ProgressStore) -> Vec<&'a ItemKey> {
    store
        .entries()
        .map(|(key, _)| key)
        .filter(|key| !schedule.items().any(|item| &item.key == *key))
        .collect()
}
