//! SQLite store tests exercising the library API directly against a
//! throwaway database file.

mod common;

use chrono::NaiveDate;
use common::setup_test_db;
use schooltasks::db::sqlite::SqliteStore;
use schooltasks::db::{TaskStore, queries};
use schooltasks::errors::AppError;
use schooltasks::models::comment::NewComment;
use schooltasks::models::role::Role;
use schooltasks::models::status::TaskStatus;
use schooltasks::models::task::{Attachment, NewTask};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn new_task(title: &str, due: &str, attachments: Vec<Attachment>) -> NewTask {
    NewTask {
        title: title.to_string(),
        subject: "Math".to_string(),
        description: "Worksheet".to_string(),
        assigned_date: date("2026-03-01"),
        due_date: date(due),
        status: TaskStatus::Pending,
        owner_id: "admin-1".to_string(),
        owner_email: "admin@example.com".to_string(),
        owner_name: None,
        attachments,
    }
}

fn attachment(name: &str, size: i64) -> Attachment {
    Attachment {
        name: name.to_string(),
        url: format!("file:///tmp/{}", name),
        size,
        storage_path: format!("/tmp/{}", name),
    }
}

#[test]
fn test_create_and_list_preserves_attachment_order() {
    let db = setup_test_db("store_roundtrip");
    let mut store = SqliteStore::open(&db).unwrap();

    let atts = vec![attachment("first.jpg", 100), attachment("second.pdf", 200)];
    let id = store.create_task(&new_task("Homework", "2026-03-10", atts)).unwrap();
    assert_eq!(id, 1);

    let tasks = store.list_tasks().unwrap();
    assert_eq!(tasks.len(), 1);

    let t = &tasks[0];
    assert_eq!(t.title, "Homework");
    assert_eq!(t.due_date, date("2026-03-10"));
    assert_eq!(t.status, TaskStatus::Pending);
    // Empty owner_name column normalizes to None.
    assert_eq!(t.owner_name, None);
    assert_eq!(t.attachments.len(), 2);
    assert_eq!(t.attachments[0].name, "first.jpg");
    assert_eq!(t.attachments[1].name, "second.pdf");
    assert_eq!(t.attachments[1].size, 200);
}

#[test]
fn test_listing_orders_by_due_date() {
    let db = setup_test_db("store_ordering");
    let mut store = SqliteStore::open(&db).unwrap();

    store.create_task(&new_task("Later", "2026-03-20", vec![])).unwrap();
    store.create_task(&new_task("Sooner", "2026-03-05", vec![])).unwrap();

    let tasks = store.list_tasks().unwrap();
    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Sooner", "Later"]);
}

#[test]
fn test_status_update_and_missing_task() {
    let db = setup_test_db("store_status");
    let mut store = SqliteStore::open(&db).unwrap();

    let id = store.create_task(&new_task("Homework", "2026-03-10", vec![])).unwrap();
    store.update_task_status(id, TaskStatus::Completed).unwrap();

    let tasks = store.list_tasks().unwrap();
    assert_eq!(tasks[0].status, TaskStatus::Completed);

    let err = store.update_task_status(99, TaskStatus::Pending).unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(99)));
}

#[test]
fn test_delete_also_drops_the_comment_thread() {
    let db = setup_test_db("store_delete");
    let mut store = SqliteStore::open(&db).unwrap();

    let id = store.create_task(&new_task("Homework", "2026-03-10", vec![])).unwrap();
    store
        .create_comment(&NewComment {
            task_id: id,
            author_id: "parent-1".to_string(),
            author_email: "parent@example.com".to_string(),
            author_name: "parent".to_string(),
            author_avatar: None,
            body: "Done tonight".to_string(),
        })
        .unwrap();
    assert_eq!(store.list_comments(id).unwrap().len(), 1);

    store.delete_task(id).unwrap();
    assert!(store.list_tasks().unwrap().is_empty());
    assert!(store.list_comments(id).unwrap().is_empty());

    let err = store.delete_task(id).unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(_)));
}

#[test]
fn test_first_sight_creates_a_parent_row() {
    let db = setup_test_db("store_roles");
    let mut store = SqliteStore::open(&db).unwrap();

    let role = store.role_for("u-1", "new@example.com").unwrap();
    assert_eq!(role, Role::Parent);

    // Second resolution reads the stored row instead of inserting again.
    let again = store.role_for("u-1", "new@example.com").unwrap();
    assert_eq!(again, Role::Parent);

    assert_eq!(store.parent_emails().unwrap(), vec!["new@example.com".to_string()]);
}

#[test]
fn test_set_role_upgrades_in_place() {
    let db = setup_test_db("store_role_upgrade");
    let mut store = SqliteStore::open(&db).unwrap();

    store.role_for("u-1", "a@example.com").unwrap();
    queries::set_role(&store.pool.conn, "u-1", "a@example.com", Role::Admin).unwrap();

    assert_eq!(store.role_for("u-1", "a@example.com").unwrap(), Role::Admin);
    // Admins are not reminder recipients.
    assert!(store.parent_emails().unwrap().is_empty());
}

#[test]
fn test_access_events_come_back_newest_first_and_bounded() {
    let db = setup_test_db("store_access");
    let mut store = SqliteStore::open(&db).unwrap();

    for i in 0..5 {
        store
            .record_access("parent@example.com", "parent", Some(&format!("dev-{}", i)))
            .unwrap();
    }

    let events = store.list_access_events(3).unwrap();
    assert_eq!(events.len(), 3);
    // Same timestamp granularity: the id tiebreak keeps newest first.
    assert_eq!(events[0].device.as_deref(), Some("dev-4"));
    assert_eq!(events[2].device.as_deref(), Some("dev-2"));
}

#[test]
fn test_malformed_attachment_json_renders_without_files() {
    let db = setup_test_db("store_bad_json");
    let mut store = SqliteStore::open(&db).unwrap();

    let id = store.create_task(&new_task("Homework", "2026-03-10", vec![])).unwrap();
    store
        .pool
        .conn
        .execute(
            "UPDATE tasks SET attachments = 'not json' WHERE id = ?1",
            [id],
        )
        .unwrap();

    let tasks = store.list_tasks().unwrap();
    assert!(tasks[0].attachments.is_empty());
}
