use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};
use tracing::debug;
use tracker_core::model::ScheduleRow;

use crate::repository::{ScheduleSource, StorageError};

use super::mapping::{
    DAY_COLUMN, LECTURE_COLUMN, PROJECT_COLUMN, ScheduleCsvRow, require_columns,
};
use super::{CsvScheduleSource, io_error, malformed};

#[async_trait]
impl ScheduleSource for CsvScheduleSource {
    async fn load_rows(&self) -> Result<Vec<ScheduleRow>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.display().to_string()));
            }
            Err(err) => return Err(io_error(&self.path, &err)),
        };

        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .from_reader(bytes.as_slice());
        let headers = reader
            .headers()
            .map_err(|err| malformed(&self.path, err))?
            .clone();
        require_columns(
            &headers,
            &[DAY_COLUMN, LECTURE_COLUMN, PROJECT_COLUMN],
            &self.path.display().to_string(),
        )?;

        let mut rows = Vec::new();
        for record in reader.deserialize::<ScheduleCsvRow>() {
            let record = record.map_err(|err| malformed(&self.path, err))?;
            rows.push(ScheduleRow::from(record));
        }

        debug!(path = %self.path.display(), rows = rows.len(), "Loaded schedule rows");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn load(contents: &str) -> Result<Vec<ScheduleRow>, StorageError> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");
        tokio::fs::write(&path, contents).await.unwrap();
        CsvScheduleSource::new(&path).load_rows().await
    }

    #[tokio::test]
    async fn empty_cells_become_absent_references() {
        let rows = load("Day,Lecture,Project\nDay 1,https://l/1,\nDay 1,,https://p/1\n")
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].lecture(), Some("https://l/1"));
        assert_eq!(rows[0].project(), None);
        assert_eq!(rows[1].lecture(), None);
        assert_eq!(rows[1].project(), Some("https://p/1"));
    }

    #[tokio::test]
    async fn extra_columns_and_column_order_are_ignored() {
        let rows = load("Topic,Project,Day,Lecture\nLoops,p,Mon,l\n").await.unwrap();
        assert_eq!(rows, [ScheduleRow::new("Mon", Some("l".into()), Some("p".into()))]);
    }

    #[tokio::test]
    async fn quoted_cells_may_contain_commas() {
        let rows = load("Day,Lecture,Project\n\"Week 1, Day 1\",\"a, b\",\n")
            .await
            .unwrap();
        assert_eq!(rows[0].day(), "Week 1, Day 1");
        assert_eq!(rows[0].lecture(), Some("a, b"));
    }

    #[tokio::test]
    async fn cells_are_read_verbatim_and_headers_are_trimmed() {
        let rows = load(" Day , Lecture ,Project\nMon, https://l/1,   \n").await.unwrap();
        assert_eq!(rows[0].day(), "Mon");
        assert_eq!(rows[0].lecture(), Some(" https://l/1"));
        assert_eq!(rows[0].project(), None);
    }

    #[tokio::test]
    async fn missing_required_column_fails() {
        let err = load("Day,Lecture\nMon,l\n").await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingColumn { column: "Project", .. }
        ));
    }

    #[tokio::test]
    async fn ragged_rows_are_malformed() {
        let err = load("Day,Lecture,Project\nMon,l,p,extra\n").await.unwrap_err();
        assert!(matches!(err, StorageError::Malformed(_)), "{err:?}");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvScheduleSource::new(dir.path().join("nope.csv"));
        let err = source.load_rows().await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }
}
