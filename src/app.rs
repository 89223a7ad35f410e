//! Top-level state container: owns the session, the resolved
//! capabilities, the displayed month cursor and the last fetched task
//! snapshot. All aggregation runs over the snapshot; every mutation goes
//! through the store and is followed by a full refresh (last write wins).

use crate::config::Config;
use crate::core::calendar::MonthCursor;
use crate::core::permissions::Capabilities;
use crate::db::TaskStore;
use crate::db::sqlite::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::comment::{Comment, NewComment};
use crate::models::role::Session;
use crate::models::status::TaskStatus;
use crate::models::task::{Attachment, NewTask, Task};
use chrono::NaiveDate;

pub struct App<S: TaskStore> {
    pub store: S,
    pub session: Session,
    pub caps: Capabilities,
    pub cursor: MonthCursor,
    pub tasks: Vec<Task>,
}

/// Open the configured SQLite store, resolve the session role (creating a
/// parent row on first sign-in) and load the initial snapshot.
pub fn open_app(cfg: &Config) -> AppResult<App<SqliteStore>> {
    let mut store = SqliteStore::open(&cfg.database)?;

    let role = store.role_for(&cfg.user_id, &cfg.user_email)?;
    let session = Session {
        user_id: cfg.user_id.clone(),
        email: cfg.user_email.clone(),
        name: if cfg.user_name.is_empty() {
            None
        } else {
            Some(cfg.user_name.clone())
        },
        role,
    };

    App::new(store, session)
}

impl<S: TaskStore> App<S> {
    pub fn new(store: S, session: Session) -> AppResult<Self> {
        let caps = Capabilities::for_session(&session);
        let mut app = Self {
            store,
            session,
            caps,
            cursor: MonthCursor::current(),
            tasks: Vec::new(),
        };
        app.refresh()?;
        Ok(app)
    }

    /// Re-pull the full task list from the store.
    pub fn refresh(&mut self) -> AppResult<()> {
        self.tasks = self.store.list_tasks()?;
        Ok(())
    }

    pub fn find_task(&self, task_id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn create_task(&mut self, draft: TaskDraft) -> AppResult<i64> {
        if !self.caps.can_create_tasks() {
            return Err(AppError::NotAuthorized(
                "only an administrator may create tasks".to_string(),
            ));
        }

        let new_task = NewTask {
            title: draft.title,
            subject: draft.subject,
            description: draft.description,
            assigned_date: draft.assigned_date,
            due_date: draft.due_date,
            status: TaskStatus::Pending,
            owner_id: self.session.user_id.clone(),
            owner_email: self.session.email.clone(),
            owner_name: self.session.name.clone(),
            attachments: draft.attachments,
        };

        let id = self.store.create_task(&new_task)?;
        self.refresh()?;
        Ok(id)
    }

    pub fn change_status(&mut self, task_id: i64, status: TaskStatus) -> AppResult<()> {
        let task = self
            .find_task(task_id)
            .ok_or(AppError::TaskNotFound(task_id))?;

        if !self.caps.can_change_status(task) {
            return Err(AppError::NotAuthorized(
                "only the task owner or an administrator may change the status".to_string(),
            ));
        }

        self.store.update_task_status(task_id, status)?;
        self.refresh()
    }

    pub fn delete_task(&mut self, task_id: i64) -> AppResult<()> {
        let task = self
            .find_task(task_id)
            .ok_or(AppError::TaskNotFound(task_id))?;

        if !self.caps.can_delete(task) {
            return Err(AppError::NotAuthorized(
                "tasks may be deleted only by the administrator who authored them".to_string(),
            ));
        }

        self.store.delete_task(task_id)?;
        self.refresh()
    }

    pub fn add_comment(&mut self, task_id: i64, body: &str) -> AppResult<i64> {
        if self.find_task(task_id).is_none() {
            return Err(AppError::TaskNotFound(task_id));
        }

        let comment = NewComment {
            task_id,
            author_id: self.session.user_id.clone(),
            author_email: self.session.email.clone(),
            author_name: self.session.display_name().to_string(),
            author_avatar: None,
            body: body.to_string(),
        };

        self.store.create_comment(&comment)
    }

    /// The task and its comments, or None when the task is no longer
    /// present (the caller renders nothing).
    pub fn comments_for(&mut self, task_id: i64) -> AppResult<Option<(Task, Vec<Comment>)>> {
        let Some(task) = self.find_task(task_id).cloned() else {
            return Ok(None);
        };

        let comments = self.store.list_comments(task_id)?;
        Ok(Some((task, comments)))
    }
}

/// Submission-form fields for a new task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub assigned_date: NaiveDate,
    pub due_date: NaiveDate,
    pub attachments: Vec<Attachment>,
}

/// Split candidate attachments into those within the size cap and the
/// names of the rejected ones. Oversized files are dropped per-file; the
/// submission continues with the rest.
pub fn partition_oversized(
    attachments: Vec<Attachment>,
    max_bytes: i64,
) -> (Vec<Attachment>, Vec<String>) {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();

    for att in attachments {
        if att.size <= max_bytes {
            valid.push(att);
        } else {
            rejected.push(att.name);
        }
    }

    (valid, rejected)
}
