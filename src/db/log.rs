use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Write an internal log line into the `log` table.
pub fn oplog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}

/// Calendar date of the most recent reminder broadcast, if any. The
/// reminder service uses this as its once-per-day guard across runs.
pub fn last_reminder_date(conn: &Connection) -> AppResult<Option<NaiveDate>> {
    let last: Option<String> = conn
        .query_row(
            "SELECT date FROM log
             WHERE operation = 'reminder_broadcast'
             ORDER BY date DESC
             LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(last
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.date_naive()))
}
