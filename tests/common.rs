#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn st() -> Command {
    cargo_bin_cmd!("schooltasks")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_schooltasks.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema and register the local user as administrator.
/// Uses --test so the real config file is never touched.
pub fn init_admin_db(db_path: &str) {
    st().args(["--db", db_path, "--test", "init", "--admin"])
        .assert()
        .success();
}

/// Add a task with the given title, subject and due date via the CLI.
pub fn add_task(db_path: &str, title: &str, subject: &str, due: &str) {
    st().args([
        "--db", db_path, "add", title, "--subject", subject, "--due", due,
    ])
    .assert()
    .success();
}
