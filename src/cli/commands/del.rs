use crate::app::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Delete a task by id (administrator, own tasks only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { task_id } = cmd {
        let mut app = open_app(cfg)?;
        app.delete_task(*task_id)?;

        success(format!("Task {} deleted", task_id));
    }
    Ok(())
}
