use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Check whether a marker-guarded migration has already been applied.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `tasks` table with the modern schema.
fn create_tasks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            title         TEXT NOT NULL,
            subject       TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT '',
            assigned_date TEXT NOT NULL,
            due_date      TEXT NOT NULL,
            status        TEXT NOT NULL DEFAULT 'pending'
                          CHECK(status IN ('pending','in_progress','completed')),
            owner_id      TEXT NOT NULL,
            owner_email   TEXT NOT NULL,
            owner_name    TEXT DEFAULT '',
            attachments   TEXT NOT NULL DEFAULT '[]',
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date);
        CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
        "#,
    )?;
    Ok(())
}

fn create_comments_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id       INTEGER NOT NULL,
            author_id     TEXT NOT NULL,
            author_email  TEXT NOT NULL,
            author_name   TEXT NOT NULL DEFAULT '',
            author_avatar TEXT DEFAULT '',
            body          TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_comments_task ON comments(task_id, created_at);
        "#,
    )?;
    Ok(())
}

fn create_access_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS access_log (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_email  TEXT NOT NULL,
            user_name   TEXT NOT NULL DEFAULT '',
            device      TEXT,
            accessed_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_access_log_at ON access_log(accessed_at);
        "#,
    )?;
    Ok(())
}

fn create_user_roles_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS user_roles (
            user_id    TEXT PRIMARY KEY,
            user_email TEXT NOT NULL UNIQUE,
            role       TEXT NOT NULL DEFAULT 'parent'
                       CHECK(role IN ('parent','admin'))
        );
        "#,
    )?;
    Ok(())
}

/// Early access_log schemas had no `device` column; add it in place.
fn migrate_add_device_to_access_log(conn: &Connection) -> Result<()> {
    let version = "20250412_0003_add_access_device";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !column_exists(conn, "access_log", "device")? {
        conn.execute("ALTER TABLE access_log ADD COLUMN device TEXT;", [])?;
        success(format!(
            "Migration applied: {} → added 'device' to access_log",
            version
        ));
    }

    mark_migration(conn, version, "Added device column to access_log")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and by `schooltasks db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (migration markers live there)
    ensure_log_table(conn)?;

    // 2) Base tables
    let had_tasks = table_exists(conn, "tasks")?;
    create_tasks_table(conn)?;
    create_comments_table(conn)?;
    create_access_log_table(conn)?;
    create_user_roles_table(conn)?;

    if !had_tasks {
        success("Created task tables (modern schema).");
    }

    // 3) Marker-guarded upgrades
    migrate_add_device_to_access_log(conn)?;

    Ok(())
}
