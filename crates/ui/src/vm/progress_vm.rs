use tracker_core::model::{ProgressStore, Schedule};
use tracker_core::progress::{Completion, overall_completion};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent_label: String,
    pub bar_style: String,
    pub completed: usize,
    pub total: usize,
    pub is_complete: bool,
}

impl From<Completion> for ProgressVm {
    fn from(completion: Completion) -> Self {
        let percent_label = completion.percent_label();
        Self {
            bar_style: format!("width: {percent_label}%;"),
            percent_label,
            completed: completion.completed,
            total: completion.total,
            is_complete: completion.is_complete(),
        }
    }
}

#[must_use]
pub fn map_overall(schedule: &Schedule, store: &ProgressStore) -> ProgressVm {
    ProgressVm::from(overall_completion(schedule, store))
}
