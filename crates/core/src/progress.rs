//! Completion ratios over a schedule and a progress store.

use std::fmt;

use crate::model::{DaySchedule, ProgressStore, Schedule};

/// Count of completed items out of a total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completion {
    pub completed: usize,
    pub total: usize,
}

impl Completion {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Fraction in `[0, 1]`. An empty total yields 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    /// Percentage in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// Percentage with two decimals, e.g. `33.33`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.2}", self.percent())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl std::ops::Add for Completion {
    type Output = Completion;

    fn add(self, rhs: Self) -> Self::Output {
        Completion::new(self.completed + rhs.completed, self.total + rhs.total)
    }
}

impl std::iter::Sum for Completion {
    fn sum<I: Iterator<Item = Completion>>(iter: I) -> Self {
        iter.fold(Completion::default(), std::ops::Add::add)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.completed, self.total, self.percent_label())
    }
}

/// Completion of one day's distinct lectures and projects.
#[must_use]
pub fn day_schedule_completion(day: &DaySchedule, store: &ProgressStore) -> Completion {
    let completed = day.items().filter(|item| store.get(&item.key)).count();
    Completion::new(completed, day.item_count())
}

/// Completion for `day`. A day missing from the schedule has no items.
#[must_use]
pub fn day_completion(schedule: &Schedule, day: &str, store: &ProgressStore) -> Completion {
    schedule
        .day(day)
        .map(|d| day_schedule_completion(d, store))
        .unwrap_or_default()
}

/// Completion across every day, weighted by item count.
#[must_use]
pub fn overall_completion(schedule: &Schedule, store: &ProgressStore) -> Completion {
    schedule
        .days()
        .iter()
        .map(|d| day_schedule_completion(d, store))
        .sum()
}
