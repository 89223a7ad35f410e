pub mod db_utils;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod sqlite;
pub mod stats;

use crate::errors::AppResult;
use crate::models::access_event::AccessEvent;
use crate::models::comment::{Comment, NewComment};
use crate::models::role::Role;
use crate::models::status::TaskStatus;
use crate::models::task::{NewTask, Task};

/// The narrow contract the core consumes from the backing store. The
/// hosted backend of the original deployment sits behind the same shape;
/// locally a SQLite implementation stands in.
pub trait TaskStore {
    /// All tasks, ascending by due date.
    fn list_tasks(&mut self) -> AppResult<Vec<Task>>;

    fn create_task(&mut self, task: &NewTask) -> AppResult<i64>;

    fn update_task_status(&mut self, task_id: i64, status: TaskStatus) -> AppResult<()>;

    fn delete_task(&mut self, task_id: i64) -> AppResult<()>;

    /// Comments for one task, ascending by creation time.
    fn list_comments(&mut self, task_id: i64) -> AppResult<Vec<Comment>>;

    fn create_comment(&mut self, comment: &NewComment) -> AppResult<i64>;

    /// Most recent access events, newest first.
    fn list_access_events(&mut self, limit: usize) -> AppResult<Vec<AccessEvent>>;

    fn record_access(&mut self, email: &str, name: &str, device: Option<&str>) -> AppResult<()>;

    /// Role for the given user, creating a default parent row on first
    /// sight.
    fn role_for(&mut self, user_id: &str, email: &str) -> AppResult<Role>;

    /// Emails of every registered parent (reminder recipients).
    fn parent_emails(&mut self) -> AppResult<Vec<String>>;
}
