use chrono::NaiveDateTime;
use serde::Serialize;

/// A logged instance of a parent account viewing the system. Append-only;
/// read in descending recency order, bounded to the most recent 50 when
/// aggregating session cadence.
#[derive(Debug, Clone, Serialize)]
pub struct AccessEvent {
    pub id: i64,
    pub user_email: String,
    pub user_name: String,
    pub device: Option<String>,
    pub accessed_at: NaiveDateTime, // ⇔ access_log.accessed_at (TEXT "YYYY-MM-DD HH:MM:SS")
}

impl AccessEvent {
    pub fn date_str(&self) -> String {
        self.accessed_at.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.accessed_at.format("%H:%M").to_string()
    }
}
