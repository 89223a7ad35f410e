//! Due-tomorrow reminder broadcast. The mail transport is an external
//! integration consumed through the Mailer trait; the service owns the
//! once-per-day guard and the per-recipient delivery accounting.

use crate::errors::AppResult;
use crate::models::task::Task;
use crate::ui::messages;
use chrono::NaiveDate;

pub trait Mailer {
    fn send(&mut self, to: &str, name: &str, subject: &str, body: &str) -> AppResult<()>;
}

/// A transport that prints the reminder to the terminal. Used by the CLI
/// where no real mail integration is configured.
pub struct ConsoleMailer;

impl Mailer for ConsoleMailer {
    fn send(&mut self, to: &str, _name: &str, subject: &str, body: &str) -> AppResult<()> {
        println!("--- reminder to {to} ---");
        println!("{subject}");
        println!("{body}");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    pub failed: usize,
    pub total: usize,
}

/// Reminder dispatcher with an explicit lifecycle: constructed with the
/// last broadcast date (persisted in the store's log table), at most one
/// broadcast per calendar day unless reset.
pub struct ReminderService {
    last_sent: Option<NaiveDate>,
}

impl ReminderService {
    pub fn new(last_sent: Option<NaiveDate>) -> Self {
        Self { last_sent }
    }

    /// Drop the once-per-day guard (manual re-send by an admin).
    pub fn reset(&mut self) {
        self.last_sent = None;
    }

    pub fn already_sent(&self, today: NaiveDate) -> bool {
        self.last_sent == Some(today)
    }

    /// Tasks whose due date is exactly tomorrow.
    pub fn due_tomorrow<'a>(tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
        let tomorrow = today.succ_opt();
        tasks
            .iter()
            .filter(|t| Some(t.due_date) == tomorrow)
            .collect()
    }

    /// Send one reminder per recipient for tomorrow's tasks. A failed
    /// delivery is counted and skipped; the remaining recipients still
    /// receive theirs.
    pub fn broadcast(
        &mut self,
        mailer: &mut dyn Mailer,
        recipients: &[String],
        tasks: &[Task],
        today: NaiveDate,
    ) -> DeliveryReport {
        if self.already_sent(today) {
            return DeliveryReport::default();
        }

        let due = Self::due_tomorrow(tasks, today);
        if due.is_empty() || recipients.is_empty() {
            return DeliveryReport::default();
        }

        let subject = format!("{} task(s) due tomorrow", due.len());
        let body = render_body(&due);

        let mut sent = 0;
        let mut failed = 0;

        for email in recipients {
            let name = email.split('@').next().unwrap_or(email);
            match mailer.send(email, name, &subject, &body) {
                Ok(()) => sent += 1,
                Err(e) => {
                    messages::error(format!("Failed to notify {}: {}", email, e));
                    failed += 1;
                }
            }
        }

        self.last_sent = Some(today);

        DeliveryReport {
            sent,
            failed,
            total: recipients.len(),
        }
    }
}

/// Plain-text reminder body: one numbered block per task.
fn render_body(tasks: &[&Task]) -> String {
    let mut out = String::new();

    for (i, t) in tasks.iter().enumerate() {
        out.push_str(&format!("TASK {}:\n", i + 1));
        out.push_str(&format!("   - Title: {}\n", t.title));
        out.push_str(&format!("   - Subject: {}\n", t.subject));
        out.push_str(&format!("   - Description: {}\n", t.description));
        out.push_str(&format!("   - Status: {}\n", t.status.label()));
        if !t.attachments.is_empty() {
            out.push_str(&format!("   - Files: {}\n", t.attachments.len()));
        }
    }

    out
}
