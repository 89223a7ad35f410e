use crate::app::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::TaskStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

const ACCESS_LIMIT: usize = 50;

/// Record an access event for the current user, or list the recent ones.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Access { log, device, list } = cmd {
        let mut app = open_app(cfg)?;

        if *log {
            let name = app.session.display_name().to_string();
            app.store
                .record_access(&cfg.user_email, &name, device.as_deref())?;
            success(format!("Access recorded for {}", cfg.user_email));
        }

        if *list {
            let events = app.store.list_access_events(ACCESS_LIMIT)?;

            if events.is_empty() {
                println!("No access events recorded yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "Parent".to_string(),
                    width: 28,
                },
                Column {
                    header: "Device".to_string(),
                    width: 12,
                },
                Column {
                    header: "Date".to_string(),
                    width: 10,
                },
                Column {
                    header: "Time".to_string(),
                    width: 5,
                },
            ]);

            for ev in &events {
                table.add_row(vec![
                    format!("{} <{}>", ev.user_name, ev.user_email),
                    ev.device.clone().unwrap_or_else(|| "PC".to_string()),
                    ev.date_str(),
                    ev.time_str(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
