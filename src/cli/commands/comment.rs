use crate::app::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET};

/// List the comment thread of a task, optionally adding one first.
/// A missing task renders nothing: the thread may have been opened for a
/// task deleted in the meantime.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Comment { task_id, add } = cmd {
        let mut app = open_app(cfg)?;

        if let Some(body) = add {
            if !body.trim().is_empty() && app.find_task(*task_id).is_some() {
                app.add_comment(*task_id, body)?;
                success("Comment added");
            }
        }

        let Some((task, comments)) = app.comments_for(*task_id)? else {
            return Ok(());
        };

        println!("\n{} {}{}{}", task.title, GREY, task.subject, RESET);
        println!("Due {} [{}]", task.due_date_str(), task.status.label());

        if comments.is_empty() {
            println!("\nNo comments yet.");
            return Ok(());
        }

        println!();
        for c in comments {
            println!("{} {}{}{}", c.author_name, GREY, c.created_at, RESET);
            println!("  {}", c.body);
        }
    }
    Ok(())
}
