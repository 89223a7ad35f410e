/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::status::TaskStatus;

/// Status color used by the calendar and report views:
/// pending → yellow, in progress → cyan, completed → green.
pub fn color_for_status(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => YELLOW,
        TaskStatus::InProgress => CYAN,
        TaskStatus::Completed => GREEN,
    }
}
