//! SQLite-backed implementation of the TaskStore contract. Mutations are
//! audit-logged into the internal `log` table.

use crate::db::pool::DbPool;
use crate::db::{TaskStore, initialize, log, queries};
use crate::errors::AppResult;
use crate::models::access_event::AccessEvent;
use crate::models::comment::{Comment, NewComment};
use crate::models::role::Role;
use crate::models::status::TaskStatus;
use crate::models::task::{NewTask, Task};

pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    /// Open the database and ensure the schema is current.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl TaskStore for SqliteStore {
    fn list_tasks(&mut self) -> AppResult<Vec<Task>> {
        queries::load_tasks(&mut self.pool)
    }

    fn create_task(&mut self, task: &NewTask) -> AppResult<i64> {
        let id = queries::insert_task(&self.pool.conn, task)?;
        log::oplog(
            &self.pool.conn,
            "task_created",
            &id.to_string(),
            &format!("{} ({})", task.title, task.subject),
        )?;
        Ok(id)
    }

    fn update_task_status(&mut self, task_id: i64, status: TaskStatus) -> AppResult<()> {
        queries::update_task_status(&self.pool.conn, task_id, status)?;
        log::oplog(
            &self.pool.conn,
            "status_changed",
            &task_id.to_string(),
            status.to_db_str(),
        )
    }

    fn delete_task(&mut self, task_id: i64) -> AppResult<()> {
        queries::delete_task(&self.pool.conn, task_id)?;
        log::oplog(&self.pool.conn, "task_deleted", &task_id.to_string(), "")
    }

    fn list_comments(&mut self, task_id: i64) -> AppResult<Vec<Comment>> {
        queries::load_comments(&mut self.pool, task_id)
    }

    fn create_comment(&mut self, comment: &NewComment) -> AppResult<i64> {
        queries::insert_comment(&self.pool.conn, comment)
    }

    fn list_access_events(&mut self, limit: usize) -> AppResult<Vec<AccessEvent>> {
        queries::load_access_events(&mut self.pool, limit)
    }

    fn record_access(&mut self, email: &str, name: &str, device: Option<&str>) -> AppResult<()> {
        queries::insert_access_event(&self.pool.conn, email, name, device)
    }

    fn role_for(&mut self, user_id: &str, email: &str) -> AppResult<Role> {
        queries::role_for(&self.pool.conn, user_id, email)
    }

    fn parent_emails(&mut self) -> AppResult<Vec<String>> {
        queries::parent_emails(&self.pool.conn)
    }
}
