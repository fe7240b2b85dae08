use chrono::{DateTime, Local, Utc};

pub struct FormatHelper;

impl FormatHelper {
    /// Local wall-clock rendering used by reports, CSV and the history list.
    pub fn local_timestamp(timestamp: &DateTime<Utc>) -> String {
        timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn short_date(timestamp: &DateTime<Utc>) -> String {
        timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
    }
}
