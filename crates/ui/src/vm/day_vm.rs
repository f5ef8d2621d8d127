use tracker_core::model::{
    ItemKey, ItemKind, ProgressStore, Schedule, ScheduleItem, reference_link,
};
use tracker_core::progress::day_schedule_completion;

use crate::vm::progress_vm::ProgressVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistItemVm {
    pub key: ItemKey,
    pub kind: ItemKind,
    pub reference: String,
    pub href: Option<String>,
    pub link_label: String,
    pub completed: bool,
}

impl ChecklistItemVm {
    fn new(item: &ScheduleItem, store: &ProgressStore) -> Self {
        let href = reference_link(&item.reference).map(|url| url.to_string());
        let link_label = if href.is_some() {
            format!("{} Link", item.kind.label())
        } else {
            item.reference.clone()
        };
        Self {
            key: item.key.clone(),
            kind: item.kind,
            reference: item.reference.clone(),
            href,
            link_label,
            completed: store.get(&item.key),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayOptionVm {
    pub index: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayVm {
    pub index: usize,
    pub day: String,
    pub options: Vec<DayOptionVm>,
    pub lectures: Vec<ChecklistItemVm>,
    pub projects: Vec<ChecklistItemVm>,
    pub progress: ProgressVm,
}

/// Builds the view model for the day at `index`, or `None` if out of range.
#[must_use]
pub fn map_day(schedule: &Schedule, index: usize, store: &ProgressStore) -> Option<DayVm> {
    let day = schedule.day_at(index)?;
    Some(DayVm {
        index,
        day: day.day().to_owned(),
        options: day_options(schedule),
        lectures: checklist(day.lectures(), store),
        projects: checklist(day.projects(), store),
        progress: ProgressVm::from(day_schedule_completion(day, store)),
    })
}

fn day_options(schedule: &Schedule) -> Vec<DayOptionVm> {
    schedule
        .days()
        .iter()
        .enumerate()
        .map(|(index, day)| DayOptionVm {
            index,
            label: day.day().to_owned(),
        })
        .collect()
}

fn checklist(items: &[ScheduleItem], store: &ProgressStore) -> Vec<ChecklistItemVm> {
    items
        .iter()
        .map(|item| ChecklistItemVm::new(item, store))
        .collect()
}
