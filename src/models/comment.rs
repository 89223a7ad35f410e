use serde::Serialize;

/// A comment on a task. Immutable once created; listed ascending by
/// creation time.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: i64,
    pub task_id: i64,
    pub author_id: String,
    pub author_email: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub body: String,
    pub created_at: String, // ⇔ comments.created_at (TEXT, ISO8601)
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub task_id: i64,
    pub author_id: String,
    pub author_email: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub body: String,
}
