//! Reminder service tests with an in-memory mail transport: due-tomorrow
//! selection, the once-per-day guard and partial delivery failures.

use chrono::NaiveDate;
use schooltasks::errors::{AppError, AppResult};
use schooltasks::models::status::TaskStatus;
use schooltasks::models::task::Task;
use schooltasks::notify::{DeliveryReport, Mailer, ReminderService};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn task(id: i64, title: &str, due: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        subject: "Math".to_string(),
        description: "Practice sheet".to_string(),
        assigned_date: date(due),
        due_date: date(due),
        status: TaskStatus::Pending,
        owner_id: "parent-1".to_string(),
        owner_email: "parent-1@example.com".to_string(),
        owner_name: None,
        attachments: Vec::new(),
        created_at: String::new(),
    }
}

/// Records every delivery; addresses in `failing` error out instead.
#[derive(Default)]
struct RecordingMailer {
    sent_to: Vec<String>,
    bodies: Vec<String>,
    failing: Vec<String>,
}

impl Mailer for RecordingMailer {
    fn send(&mut self, to: &str, _name: &str, _subject: &str, body: &str) -> AppResult<()> {
        if self.failing.iter().any(|f| f == to) {
            return Err(AppError::Reminder(format!("smtp rejected {}", to)));
        }
        self.sent_to.push(to.to_string());
        self.bodies.push(body.to_string());
        Ok(())
    }
}

#[test]
fn test_due_tomorrow_picks_only_the_next_day() {
    let today = date("2026-03-10");
    let tasks = vec![
        task(1, "Due today", "2026-03-10"),
        task(2, "Due tomorrow", "2026-03-11"),
        task(3, "Due later", "2026-03-12"),
    ];

    let due = ReminderService::due_tomorrow(&tasks, today);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, 2);
}

#[test]
fn test_broadcast_reaches_every_recipient_once() {
    let today = date("2026-03-10");
    let tasks = vec![task(1, "Essay draft", "2026-03-11")];
    let recipients = vec![
        "a@example.com".to_string(),
        "b@example.com".to_string(),
    ];

    let mut mailer = RecordingMailer::default();
    let mut service = ReminderService::new(None);
    let report = service.broadcast(&mut mailer, &recipients, &tasks, today);

    assert_eq!(
        report,
        DeliveryReport {
            sent: 2,
            failed: 0,
            total: 2
        }
    );
    assert_eq!(mailer.sent_to, recipients);
    assert!(mailer.bodies[0].contains("Essay draft"));
    assert!(mailer.bodies[0].contains("TASK 1:"));
}

#[test]
fn test_second_broadcast_on_the_same_day_is_suppressed() {
    let today = date("2026-03-10");
    let tasks = vec![task(1, "Essay draft", "2026-03-11")];
    let recipients = vec!["a@example.com".to_string()];

    let mut mailer = RecordingMailer::default();
    let mut service = ReminderService::new(None);

    let first = service.broadcast(&mut mailer, &recipients, &tasks, today);
    assert_eq!(first.sent, 1);
    assert!(service.already_sent(today));

    let second = service.broadcast(&mut mailer, &recipients, &tasks, today);
    assert_eq!(second, DeliveryReport::default());
    assert_eq!(mailer.sent_to.len(), 1);

    // reset() lifts the guard for a manual re-send.
    service.reset();
    let third = service.broadcast(&mut mailer, &recipients, &tasks, today);
    assert_eq!(third.sent, 1);
}

#[test]
fn test_failed_delivery_does_not_stop_the_broadcast() {
    let today = date("2026-03-10");
    let tasks = vec![task(1, "Essay draft", "2026-03-11")];
    let recipients = vec![
        "bad@example.com".to_string(),
        "good@example.com".to_string(),
    ];

    let mut mailer = RecordingMailer {
        failing: vec!["bad@example.com".to_string()],
        ..Default::default()
    };
    let mut service = ReminderService::new(None);
    let report = service.broadcast(&mut mailer, &recipients, &tasks, today);

    assert_eq!(report.sent, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.total, 2);
    assert_eq!(mailer.sent_to, vec!["good@example.com".to_string()]);

    // A partially failed broadcast still arms the daily guard.
    assert!(service.already_sent(today));
}

#[test]
fn test_nothing_due_means_nothing_sent() {
    let today = date("2026-03-10");
    let tasks = vec![task(1, "Already past", "2026-03-09")];
    let recipients = vec!["a@example.com".to_string()];

    let mut mailer = RecordingMailer::default();
    let mut service = ReminderService::new(None);
    let report = service.broadcast(&mut mailer, &recipients, &tasks, today);

    assert_eq!(report, DeliveryReport::default());
    assert!(mailer.sent_to.is_empty());
    // Guard stays unarmed so a later run the same day can still send.
    assert!(!service.already_sent(today));
}
