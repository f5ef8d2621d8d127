use async_trait::async_trait;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::debug;
use tracker_core::model::ProgressStore;

use crate::repository::{ProgressRepository, StorageError};

use super::mapping::{
    COMPLETED_COLUMN, KEY_COLUMN, ProgressCsvRecord, ProgressCsvRow, parse_completed,
    require_columns,
};
use super::{CsvProgressRepository, io_error, malformed};

impl CsvProgressRepository {
    fn parse(&self, bytes: &[u8]) -> Result<ProgressStore, StorageError> {
        let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(bytes);
        let headers = reader
            .headers()
            .map_err(|err| malformed(&self.path, err))?
            .clone();
        require_columns(
            &headers,
            &[KEY_COLUMN, COMPLETED_COLUMN],
            &self.path.display().to_string(),
        )?;

        let mut entries = Vec::new();
        for (index, record) in reader.deserialize::<ProgressCsvRow>().enumerate() {
            let record = record.map_err(|err| malformed(&self.path, err))?;
            let completed = parse_completed(&record.completed).ok_or_else(|| {
                malformed(
                    &self.path,
                    format!(
                        "row {}: invalid {COMPLETED_COLUMN} value `{}`",
                        index + 1,
                        record.completed
                    ),
                )
            })?;
            entries.push((record.key, completed));
        }
        Ok(ProgressStore::from_entries(entries))
    }

    fn render(&self, store: &ProgressStore) -> Result<Vec<u8>, StorageError> {
        // The header is written by hand so an empty store still gets one.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record([KEY_COLUMN, COMPLETED_COLUMN])
            .map_err(|err| malformed(&self.path, err))?;
        for (key, completed) in store.entries() {
            writer
                .serialize(ProgressCsvRecord::new(key, completed))
                .map_err(|err| malformed(&self.path, err))?;
        }
        writer
            .into_inner()
            .map_err(|err| StorageError::Io(format!("{}: {err}", self.path.display())))
    }
}

#[async_trait]
impl ProgressRepository for CsvProgressRepository {
    async fn load_progress(&self) -> Result<ProgressStore, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No progress file yet");
                return Ok(ProgressStore::new());
            }
            Err(err) => return Err(io_error(&self.path, &err)),
        };

        let store = self.parse(&bytes)?;
        debug!(path = %self.path.display(), entries = store.len(), "Loaded progress");
        Ok(store)
    }

    async fn save_progress(&self, store: &ProgressStore) -> Result<(), StorageError> {
        let bytes = self.render(store)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| io_error(parent, &err))?;
        }
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|err| io_error(&self.path, &err))?;

        debug!(path = %self.path.display(), entries = store.len(), "Saved progress");
        Ok(())
    }
}
