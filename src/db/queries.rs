use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::access_event::AccessEvent;
use crate::models::comment::{Comment, NewComment};
use crate::models::role::Role;
use crate::models::status::TaskStatus;
use crate::models::task::{Attachment, NewTask, Task};
use crate::utils::date;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Tasks
// ---------------------------

pub fn load_tasks(pool: &mut DbPool) -> AppResult<Vec<Task>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM tasks
         ORDER BY due_date ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_task_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_task_row(row: &Row) -> Result<Task> {
    let due_str: String = row.get("due_date")?;
    let assigned_str: String = row.get("assigned_date")?;

    let due_date = parse_date_field(&due_str)?;
    let assigned_date = parse_date_field(&assigned_str)?;

    let status_str: String = row.get("status")?;
    let status = TaskStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    // Tolerate malformed attachment JSON: render the task without files
    // rather than dropping the whole row.
    let attachments_json: String = row.get("attachments")?;
    let attachments: Vec<Attachment> = serde_json::from_str(&attachments_json).unwrap_or_default();

    let owner_name: Option<String> = row.get("owner_name")?;
    let owner_name = owner_name.filter(|n| !n.is_empty());

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        subject: row.get("subject")?,
        description: row.get("description")?,
        assigned_date,
        due_date,
        status,
        owner_id: row.get("owner_id")?,
        owner_email: row.get("owner_email")?,
        owner_name,
        attachments,
        created_at: row.get("created_at")?,
    })
}

fn parse_date_field(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

pub fn insert_task(conn: &Connection, task: &NewTask) -> AppResult<i64> {
    let attachments_json = serde_json::to_string(&task.attachments)
        .map_err(|e| AppError::Other(format!("Failed to encode attachments: {e}")))?;

    conn.execute(
        "INSERT INTO tasks (title, subject, description, assigned_date, due_date,
                            status, owner_id, owner_email, owner_name, attachments, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            task.title,
            task.subject,
            task.description,
            task.assigned_date.format("%Y-%m-%d").to_string(),
            task.due_date.format("%Y-%m-%d").to_string(),
            task.status.to_db_str(),
            task.owner_id,
            task.owner_email,
            task.owner_name.clone().unwrap_or_default(),
            attachments_json,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn update_task_status(conn: &Connection, task_id: i64, status: TaskStatus) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE tasks SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), task_id],
    )?;

    if changed == 0 {
        return Err(AppError::TaskNotFound(task_id));
    }
    Ok(())
}

pub fn delete_task(conn: &Connection, task_id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![task_id])?;

    if changed == 0 {
        return Err(AppError::TaskNotFound(task_id));
    }

    // Comments are owned by the task they reference.
    conn.execute("DELETE FROM comments WHERE task_id = ?1", params![task_id])?;
    Ok(())
}

// ---------------------------
// Comments
// ---------------------------

pub fn load_comments(pool: &mut DbPool, task_id: i64) -> AppResult<Vec<Comment>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM comments
         WHERE task_id = ?1
         ORDER BY created_at ASC, id ASC",
    )?;

    let rows = stmt.query_map([task_id], map_comment_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_comment_row(row: &Row) -> Result<Comment> {
    let avatar: Option<String> = row.get("author_avatar")?;

    Ok(Comment {
        id: row.get("id")?,
        task_id: row.get("task_id")?,
        author_id: row.get("author_id")?,
        author_email: row.get("author_email")?,
        author_name: row.get("author_name")?,
        author_avatar: avatar.filter(|a| !a.is_empty()),
        body: row.get("body")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_comment(conn: &Connection, comment: &NewComment) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO comments (task_id, author_id, author_email, author_name,
                               author_avatar, body, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            comment.task_id,
            comment.author_id,
            comment.author_email,
            comment.author_name,
            comment.author_avatar.clone().unwrap_or_default(),
            comment.body,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Access log
// ---------------------------

pub fn load_access_events(pool: &mut DbPool, limit: usize) -> AppResult<Vec<AccessEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM access_log
         ORDER BY accessed_at DESC, id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit as i64], map_access_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_access_row(row: &Row) -> Result<AccessEvent> {
    let at_str: String = row.get("accessed_at")?;
    let accessed_at = date::parse_datetime(&at_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(at_str.clone())),
        )
    })?;

    Ok(AccessEvent {
        id: row.get("id")?,
        user_email: row.get("user_email")?,
        user_name: row.get("user_name")?,
        device: row.get("device")?,
        accessed_at,
    })
}

pub fn insert_access_event(
    conn: &Connection,
    email: &str,
    name: &str,
    device: Option<&str>,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO access_log (user_email, user_name, device, accessed_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            email,
            name,
            device,
            date::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        ],
    )?;
    Ok(())
}

// ---------------------------
// Roles
// ---------------------------

/// Look up the role for a user by email, inserting a default parent row
/// when the user has never been seen before.
pub fn role_for(conn: &Connection, user_id: &str, email: &str) -> AppResult<Role> {
    let existing: Option<String> = conn
        .query_row(
            "SELECT role FROM user_roles WHERE user_email = ?1",
            [email],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(role_str) = existing {
        return Role::from_db_str(&role_str).ok_or(AppError::InvalidRole(role_str));
    }

    conn.execute(
        "INSERT INTO user_roles (user_id, user_email, role)
         VALUES (?1, ?2, 'parent')",
        params![user_id, email],
    )?;

    Ok(Role::Parent)
}

pub fn set_role(conn: &Connection, user_id: &str, email: &str, role: Role) -> AppResult<()> {
    conn.execute(
        "INSERT INTO user_roles (user_id, user_email, role)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(user_id) DO UPDATE SET role = excluded.role",
        params![user_id, email, role.to_db_str()],
    )?;
    Ok(())
}

pub fn parent_emails(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT user_email FROM user_roles WHERE role = 'parent'")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
