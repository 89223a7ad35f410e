use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::size_mb;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {}", CYAN, RESET, size_mb(file_size as i64));

    //
    // 2) ROW COUNTS
    //
    let tasks: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
    let comments: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM comments", [], |row| row.get(0))?;
    let accesses: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM access_log", [], |row| row.get(0))?;

    println!("{}• Tasks:{} {}{}{}", CYAN, RESET, GREEN, tasks, RESET);
    println!("{}• Comments:{} {}{}{}", CYAN, RESET, GREEN, comments, RESET);
    println!("{}• Accesses:{} {}{}{}", CYAN, RESET, GREEN, accesses, RESET);

    //
    // 3) DUE-DATE RANGE
    //
    let first_due: Option<String> = pool
        .conn
        .query_row(
            "SELECT due_date FROM tasks ORDER BY due_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_due: Option<String> = pool
        .conn
        .query_row(
            "SELECT due_date FROM tasks ORDER BY due_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_due.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_due.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Due-date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
