use chrono::{DateTime, Utc};

#[must_use]
pub fn format_saved_at(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
