use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Run SQLite's integrity check and return the result string
/// ("ok" when healthy).
pub fn integrity_check(pool: &mut DbPool) -> AppResult<String> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(result)
}

/// Reclaim free pages and defragment the database file.
pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}
