use crate::app::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::TaskStore;
use crate::db::log::{last_reminder_date, oplog};
use crate::errors::AppResult;
use crate::notify::{ConsoleMailer, ReminderService};
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Broadcast due-tomorrow reminders to every registered parent, at most
/// once per day unless --force is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remind { force } = cmd {
        let mut app = open_app(cfg)?;
        let today = date::today();

        let last_sent = last_reminder_date(&app.store.pool.conn)?;
        let mut service = ReminderService::new(last_sent);
        if *force {
            service.reset();
        }

        if service.already_sent(today) {
            info("Reminders were already sent today (use --force to re-send).");
            return Ok(());
        }

        let due = ReminderService::due_tomorrow(&app.tasks, today);
        if due.is_empty() {
            info("No tasks due tomorrow.");
            return Ok(());
        }

        // Leave the guard unarmed so a run after a parent registers can
        // still broadcast the same day.
        let recipients = app.store.parent_emails()?;
        if recipients.is_empty() {
            info("No registered parents to notify.");
            return Ok(());
        }

        let mut mailer = ConsoleMailer;
        let report = service.broadcast(&mut mailer, &recipients, &app.tasks, today);

        oplog(
            &app.store.pool.conn,
            "reminder_broadcast",
            "",
            &format!("sent={} failed={}", report.sent, report.failed),
        )?;

        success(format!(
            "Reminders: {} sent, {} failed, {} recipient(s)",
            report.sent, report.failed, report.total
        ));
    }
    Ok(())
}
