//! Pure-logic tests: calendar grid construction, due-date binning,
//! report aggregates, session cadence and capability checks.

use chrono::{NaiveDate, NaiveDateTime};
use schooltasks::core::binning::{
    description_preview, display_file_name, is_image, task_view, tasks_for_day,
};
use schooltasks::core::calendar::{Cell, MonthCursor, is_same_day, month_grid};
use schooltasks::core::metrics::{parent_metrics, percentage, task_metrics};
use schooltasks::core::permissions::Capabilities;
use schooltasks::core::sessions::session_stats;
use schooltasks::models::access_event::AccessEvent;
use schooltasks::models::role::{Role, Session};
use schooltasks::models::status::TaskStatus;
use schooltasks::models::task::{Attachment, Task};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn task(id: i64, subject: &str, due: &str, status: TaskStatus, owner: &str) -> Task {
    Task {
        id,
        title: format!("Task {}", id),
        subject: subject.to_string(),
        description: String::new(),
        assigned_date: date(due),
        due_date: date(due),
        status,
        owner_id: owner.to_string(),
        owner_email: owner.to_string(),
        owner_name: None,
        attachments: Vec::new(),
        created_at: String::new(),
    }
}

fn event(id: i64, email: &str, at: &str) -> AccessEvent {
    AccessEvent {
        id,
        user_email: email.to_string(),
        user_name: email.split('@').next().unwrap().to_string(),
        device: None,
        accessed_at: datetime(at),
    }
}

#[test]
fn test_grid_cell_count_and_leading_blanks() {
    // 2024-02-01 is a Thursday, so four blanks precede day 1.
    let grid = month_grid(2024, 1);
    assert_eq!(grid.leading_blanks, 4);
    assert_eq!(grid.days_in_month, 29); // leap year
    assert_eq!(grid.cells.len(), 33);
    assert_eq!(grid.cells[3], Cell::Blank);
    assert_eq!(grid.cells[4], Cell::Day(1));
    assert_eq!(*grid.cells.last().unwrap(), Cell::Day(29));
}

#[test]
fn test_grid_non_leap_february() {
    let grid = month_grid(2023, 1);
    assert_eq!(grid.days_in_month, 28);
}

#[test]
fn test_grid_sunday_start_has_no_blanks() {
    // 2026-03-01 is a Sunday.
    let grid = month_grid(2026, 2);
    assert_eq!(grid.leading_blanks, 0);
    assert_eq!(grid.cells[0], Cell::Day(1));
}

#[test]
fn test_is_same_day_matches_all_three_components() {
    let reference = date("2026-03-10");
    assert!(is_same_day(10, 2, 2026, reference));
    assert!(!is_same_day(10, 2, 2025, reference));
    assert!(!is_same_day(10, 3, 2026, reference));
    assert!(!is_same_day(11, 2, 2026, reference));
}

#[test]
fn test_month_cursor_wraps_across_year_boundaries() {
    let mut cursor = MonthCursor {
        month0: 11,
        year: 2025,
    };
    cursor.next();
    assert_eq!((cursor.month0, cursor.year), (0, 2026));

    cursor.prev();
    assert_eq!((cursor.month0, cursor.year), (11, 2025));

    let mut jan = MonthCursor {
        month0: 0,
        year: 2026,
    };
    jan.prev();
    assert_eq!((jan.month0, jan.year), (11, 2025));
}

#[test]
fn test_tasks_for_day_filters_on_the_exact_date() {
    let tasks = vec![
        task(1, "Math", "2026-03-10", TaskStatus::Pending, "a@x.com"),
        task(2, "Art", "2025-03-10", TaskStatus::Pending, "a@x.com"),
        task(3, "Math", "2026-04-10", TaskStatus::Pending, "a@x.com"),
        task(4, "Science", "2026-03-10", TaskStatus::Completed, "b@x.com"),
    ];

    let day = tasks_for_day(&tasks, 10, 2, 2026);
    let ids: Vec<i64> = day.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 4]); // input order preserved

    assert!(tasks_for_day(&tasks, 11, 2, 2026).is_empty());
}

#[test]
fn test_description_preview_truncates_at_80_chars() {
    let short = "Read chapter three";
    assert_eq!(description_preview(short), short);

    let long = "x".repeat(85);
    let preview = description_preview(&long);
    assert_eq!(preview.chars().count(), 83);
    assert!(preview.ends_with("..."));

    let exact = "y".repeat(80);
    assert_eq!(description_preview(&exact), exact);
}

#[test]
fn test_image_classification_is_case_insensitive() {
    assert!(is_image("photo.JPG"));
    assert!(is_image("scan.png"));
    assert!(is_image("anim.WebP"));
    assert!(!is_image("notes.pdf"));
    assert!(!is_image("README"));
}

#[test]
fn test_long_file_names_collapse_to_a_ten_char_stub() {
    assert_eq!(display_file_name("short.png"), "short.png");
    assert_eq!(display_file_name("exactly20chars!!.png"), "exactly20chars!!.png");
    // Longer than 20 characters: first 10 plus the literal suffix,
    // regardless of the real extension.
    assert_eq!(
        display_file_name("very_long_homework_scan.pdf"),
        "very_long_ .img"
    );
}

#[test]
fn test_task_view_derives_ownership_and_attachment_facts() {
    let mut t = task(1, "Math", "2026-03-10", TaskStatus::Pending, "parent-1");
    t.description = "d".repeat(100);
    t.attachments.push(Attachment {
        name: "a_really_long_worksheet_photo.jpg".to_string(),
        url: "http://example/a.jpg".to_string(),
        size: 1024,
        storage_path: "tasks/a.jpg".to_string(),
    });

    let view = task_view(&t, "parent-1");
    assert!(view.is_own);
    assert!(view.preview.ends_with("..."));
    assert_eq!(view.attachments.len(), 1);
    assert!(view.attachments[0].is_image);
    assert_eq!(view.attachments[0].display_name, "a_really_l .img");

    let other = task_view(&t, "parent-2");
    assert!(!other.is_own);
}

#[test]
fn test_percentage_rounds_to_one_decimal() {
    assert_eq!(percentage(0, 0), 0.0);
    assert_eq!(percentage(3, 3), 100.0);
    assert_eq!(percentage(1, 4), 25.0);
    assert_eq!(percentage(2, 3), 66.7);
    assert_eq!(percentage(1, 3), 33.3);
}

#[test]
fn test_task_metrics_counts_and_subject_order() {
    let tasks = vec![
        task(1, "Math", "2026-03-10", TaskStatus::Pending, "a@x.com"),
        task(2, "Art", "2026-03-11", TaskStatus::Completed, "a@x.com"),
        task(3, "Math", "2026-03-12", TaskStatus::InProgress, "b@x.com"),
        task(4, "Math", "2026-03-13", TaskStatus::Pending, "b@x.com"),
    ];

    let m = task_metrics(&tasks);
    assert_eq!(m.total, 4);
    assert_eq!(m.pending, 2);
    assert_eq!(m.in_progress, 1);
    assert_eq!(m.completed, 1);
    assert_eq!(m.percentage_for(TaskStatus::Pending), 50.0);

    // Subjects keep first-encountered order.
    assert_eq!(
        m.by_subject,
        vec![("Math".to_string(), 3), ("Art".to_string(), 1)]
    );
}

#[test]
fn test_parent_metrics_distinguishes_open_task_holders() {
    let tasks = vec![
        task(1, "Math", "2026-03-10", TaskStatus::Completed, "a@x.com"),
        task(2, "Art", "2026-03-11", TaskStatus::Pending, "b@x.com"),
        task(3, "Math", "2026-03-12", TaskStatus::Completed, "a@x.com"),
    ];

    let p = parent_metrics(&tasks);
    assert_eq!(p.active_parents, 2);
    assert_eq!(p.parents_with_open_tasks, 1);

    let empty = parent_metrics(&[]);
    assert_eq!(empty.active_parents, 0);
}

#[test]
fn test_session_stats_excludes_implausible_gaps() {
    // 30-minute gap counts; the 4.5-hour jump to the afternoon does not.
    let events = vec![
        event(1, "a@x.com", "2026-03-10 09:00:00"),
        event(2, "a@x.com", "2026-03-10 09:30:00"),
        event(3, "a@x.com", "2026-03-10 14:00:00"),
    ];

    let stats = session_stats(&events);
    assert_eq!(stats.counted_gaps, 1);
    assert_eq!(stats.average_gap_minutes, 30);
}

#[test]
fn test_session_stats_groups_per_user() {
    // Interleaved users: gaps are measured within each user's own history.
    let events = vec![
        event(1, "a@x.com", "2026-03-10 09:00:00"),
        event(2, "b@x.com", "2026-03-10 09:10:00"),
        event(3, "a@x.com", "2026-03-10 09:20:00"),
        event(4, "b@x.com", "2026-03-10 09:50:00"),
    ];

    let stats = session_stats(&events);
    assert_eq!(stats.counted_gaps, 2); // 20 min for a, 40 min for b
    assert_eq!(stats.average_gap_minutes, 30);
}

#[test]
fn test_session_stats_needs_at_least_two_events() {
    assert_eq!(session_stats(&[]).average_gap_minutes, 0);

    let one = vec![event(1, "a@x.com", "2026-03-10 09:00:00")];
    let stats = session_stats(&one);
    assert_eq!(stats.average_gap_minutes, 0);
    assert_eq!(stats.counted_gaps, 0);
}

fn session(user_id: &str, role: Role) -> Session {
    Session {
        user_id: user_id.to_string(),
        email: format!("{}@example.com", user_id),
        name: None,
        role,
    }
}

#[test]
fn test_admin_capabilities() {
    let caps = Capabilities::for_session(&session("admin-1", Role::Admin));
    let own = task(1, "Math", "2026-03-10", TaskStatus::Pending, "admin-1");
    let foreign = task(2, "Math", "2026-03-10", TaskStatus::Pending, "parent-1");

    assert!(caps.can_create_tasks());
    assert!(caps.can_view_reports());
    assert!(caps.can_change_status(&own));
    assert!(caps.can_change_status(&foreign));
    assert!(caps.can_delete(&own));
    // Admins may only delete tasks they authored themselves.
    assert!(!caps.can_delete(&foreign));
}

#[test]
fn test_parent_capabilities() {
    let caps = Capabilities::for_session(&session("parent-1", Role::Parent));
    let own = task(1, "Math", "2026-03-10", TaskStatus::Pending, "parent-1");
    let foreign = task(2, "Math", "2026-03-10", TaskStatus::Pending, "parent-2");

    assert!(!caps.can_create_tasks());
    assert!(!caps.can_view_reports());
    assert!(caps.can_change_status(&own));
    assert!(!caps.can_change_status(&foreign));
    assert!(!caps.can_delete(&own));
    assert!(!caps.can_delete(&foreign));
}
