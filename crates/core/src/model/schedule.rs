use thiserror::Error;

use crate::model::item::{ItemKind, ScheduleItem};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    #[error("schedule row {row} has an empty day")]
    EmptyDay { row: usize },
}

//
// ─── ROWS ──────────────────────────────────────────────────────────────────────
//

/// One row of the schedule table as loaded from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    day: String,
    lecture: Option<String>,
    project: Option<String>,
}

impl ScheduleRow {
    /// Builds a row, treating blank references as absent.
    ///
    /// Cells are kept verbatim, surrounding whitespace included, because they
    /// are part of the item keys already written to progress files.
    #[must_use]
    pub fn new(
        day: impl Into<String>,
        lecture: Option<String>,
        project: Option<String>,
    ) -> Self {
        Self {
            day: day.into(),
            lecture: normalize_reference(lecture),
            project: normalize_reference(project),
        }
    }

    #[must_use]
    pub fn day(&self) -> &str {
        &self.day
    }

    #[must_use]
    pub fn lecture(&self) -> Option<&str> {
        self.lecture.as_deref()
    }

    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
}

fn normalize_reference(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

//
// ─── SCHEDULE ──────────────────────────────────────────────────────────────────
//

/// Distinct lectures and projects scheduled on one day, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    day: String,
    lectures: Vec<ScheduleItem>,
    projects: Vec<ScheduleItem>,
}

impl DaySchedule {
    fn new(day: &str) -> Self {
        Self {
            day: day.to_owned(),
            lectures: Vec::new(),
            projects: Vec::new(),
        }
    }

    fn push(&mut self, kind: ItemKind, reference: &str) {
        let bucket = match kind {
            ItemKind::Lecture => &mut self.lectures,
            ItemKind::Project => &mut self.projects,
        };
        if bucket.iter().any(|item| item.reference == reference) {
            return;
        }
        bucket.push(ScheduleItem::new(&self.day, kind, reference));
    }

    #[must_use]
    pub fn day(&self) -> &str {
        &self.day
    }

    #[must_use]
    pub fn lectures(&self) -> &[ScheduleItem] {
        &self.lectures
    }

    #[must_use]
    pub fn projects(&self) -> &[ScheduleItem] {
        &self.projects
    }

    /// Lectures followed by projects.
    pub fn items(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.lectures.iter().chain(self.projects.iter())
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lectures.len() + self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// The whole learning schedule grouped by day.
///
/// Days keep the order in which they first appear in the source rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    days: Vec<DaySchedule>,
}

impl Schedule {
    /// Groups rows by day and collapses duplicate references.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::EmptyDay` if a row has a blank day.
    pub fn from_rows<I>(rows: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = ScheduleRow>,
    {
        let mut days: Vec<DaySchedule> = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            if row.day().trim().is_empty() {
                return Err(ScheduleError::EmptyDay { row: index + 1 });
            }
            let position = match days.iter().position(|d| d.day == row.day()) {
                Some(position) => position,
                None => {
                    days.push(DaySchedule::new(row.day()));
                    days.len() - 1
                }
            };
            let day = &mut days[position];
            if let Some(lecture) = row.lecture() {
                day.push(ItemKind::Lecture, lecture);
            }
            if let Some(project) = row.project() {
                day.push(ItemKind::Project, project);
            }
        }
        Ok(Self { days })
    }

    #[must_use]
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    #[must_use]
    pub fn day(&self, day: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == day)
    }

    #[must_use]
    pub fn day_at(&self, index: usize) -> Option<&DaySchedule> {
        self.days.get(index)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Every item across all days.
    pub fn items(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.days.iter().flat_map(DaySchedule::items)
    }
}
