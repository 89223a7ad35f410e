use super::status::TaskStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A file attached to a task. Stored as a JSON array in the tasks table,
/// in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
    pub size: i64, // bytes
    pub storage_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub assigned_date: NaiveDate, // ⇔ tasks.assigned_date (TEXT "YYYY-MM-DD")
    pub due_date: NaiveDate,      // ⇔ tasks.due_date (TEXT "YYYY-MM-DD", no time-of-day)
    pub status: TaskStatus,       // ⇔ tasks.status ('pending'|'in_progress'|'completed')
    pub owner_id: String,         // ⇔ tasks.owner_id
    pub owner_email: String,      // ⇔ tasks.owner_email
    pub owner_name: Option<String>,
    pub attachments: Vec<Attachment>, // ⇔ tasks.attachments (TEXT, JSON array)
    pub created_at: String,           // ⇔ tasks.created_at (TEXT, ISO8601)
}

impl Task {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    /// Display name for the owner: the stored name, or the local part of
    /// the email when no name was recorded.
    pub fn owner_label(&self) -> &str {
        match self.owner_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.owner_email.split('@').next().unwrap_or(&self.owner_email),
        }
    }

    pub fn due_date_str(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }
}

/// Fields supplied by the submission form; the id and created_at are
/// assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub assigned_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub owner_id: String,
    pub owner_email: String,
    pub owner_name: Option<String>,
    pub attachments: Vec<Attachment>,
}
