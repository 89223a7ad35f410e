use crate::app::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::status::TaskStatus;
use crate::ui::messages::success;

/// Change the status of a task (owner or administrator).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { task_id, status } = cmd {
        let status = TaskStatus::from_db_str(status)
            .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut app = open_app(cfg)?;
        app.change_status(*task_id, status)?;

        success(format!("Task {} is now {}", task_id, status.label()));
    }
    Ok(())
}
