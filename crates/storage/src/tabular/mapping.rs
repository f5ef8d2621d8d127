use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracker_core::model::{ItemKey, ScheduleRow};

use crate::repository::StorageError;

pub const DAY_COLUMN: &str = "Day";
pub const LECTURE_COLUMN: &str = "Lecture";
pub const PROJECT_COLUMN: &str = "Project";
pub const KEY_COLUMN: &str = "Key";
pub const COMPLETED_COLUMN: &str = "Completed";

const TRUE_CELL: &str = "True";
const FALSE_CELL: &str = "False";

#[derive(Debug, Deserialize)]
pub(super) struct ScheduleCsvRow {
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "Lecture")]
    lecture: Option<String>,
    #[serde(rename = "Project")]
    project: Option<String>,
}

impl From<ScheduleCsvRow> for ScheduleRow {
    fn from(row: ScheduleCsvRow) -> Self {
        ScheduleRow::new(row.day, row.lecture, row.project)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ProgressCsvRow {
    #[serde(rename = "Key")]
    pub key: ItemKey,
    #[serde(rename = "Completed")]
    pub completed: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ProgressCsvRecord<'a> {
    #[serde(rename = "Key")]
    pub key: &'a ItemKey,
    #[serde(rename = "Completed")]
    pub completed: &'static str,
}

impl<'a> ProgressCsvRecord<'a> {
    pub(super) fn new(key: &'a ItemKey, completed: bool) -> Self {
        Self {
            key,
            completed: completed_cell(completed),
        }
    }
}

/// Fails with `MissingColumn` on the first required column the header lacks.
pub(super) fn require_columns(
    headers: &StringRecord,
    required: &[&'static str],
    source_name: &str,
) -> Result<(), StorageError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(StorageError::MissingColumn {
                column,
                source_name: source_name.to_owned(),
            });
        }
    }
    Ok(())
}

/// Parses a `Completed` cell. Accepts the `True`/`False` spelling written by
/// this crate, any casing of it, and `1`/`0`.
pub(super) fn parse_completed(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn completed_cell(completed: bool) -> &'static str {
    if completed { TRUE_CELL } else { FALSE_CELL }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_cells_parse_loosely() {
        assert_eq!(parse_completed("True"), Some(true));
        assert_eq!(parse_completed(" false "), Some(false));
        assert_eq!(parse_completed("TRUE"), Some(true));
        assert_eq!(parse_completed("1"), Some(true));
        assert_eq!(parse_completed("0"), Some(false));
        assert_eq!(parse_completed("yes"), None);
        assert_eq!(parse_completed(""), None);
    }

    #[test]
    fn completed_cell_round_trips() {
        assert_eq!(parse_completed(completed_cell(true)), Some(true));
        assert_eq!(parse_completed(completed_cell(false)), Some(false));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let headers = StringRecord::from(vec!["Day", "Lecture"]);
        let err = require_columns(
            &headers,
            &[DAY_COLUMN, LECTURE_COLUMN, PROJECT_COLUMN],
            "schedule.csv",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingColumn { column: "Project", .. }
        ));
    }
}
