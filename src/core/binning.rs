//! Task binning: map the flat task list onto calendar days and derive the
//! per-task display facts used by the calendar cells.

use crate::models::task::{Attachment, Task};
use chrono::Datelike;

/// Description preview length in characters.
pub const PREVIEW_LEN: usize = 80;

/// Filename extensions classified as images (case-insensitive).
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Filter the task list to those due on (day, displayed month, displayed
/// year). Binning is a pure calendar-field match on the due date, not a
/// range check; filtering preserves the input order.
pub fn tasks_for_day(tasks: &[Task], day: u32, month0: u32, year: i32) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| {
            t.due_date.day() == day && t.due_date.month0() == month0 && t.due_date.year() == year
        })
        .collect()
}

/// First 80 characters of the description, with an ellipsis when longer.
pub fn description_preview(description: &str) -> String {
    let mut preview: String = description.chars().take(PREVIEW_LEN).collect();
    if description.chars().count() > PREVIEW_LEN {
        preview.push_str("...");
    }
    preview
}

/// Image vs. other, by filename extension.
pub fn is_image(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Display name for an attachment: names longer than 20 characters render
/// as their first 10 characters plus a literal " .img" suffix, for every
/// file type. Lossy, but it is the behavior the production front end
/// shipped with; see DESIGN.md before changing it.
pub fn display_file_name(file_name: &str) -> String {
    if file_name.chars().count() > 20 {
        let mut short: String = file_name.chars().take(10).collect();
        short.push_str(" .img");
        short
    } else {
        file_name.to_string()
    }
}

/// Per-attachment display facts.
#[derive(Debug, Clone)]
pub struct AttachmentView<'a> {
    pub attachment: &'a Attachment,
    pub display_name: String,
    pub is_image: bool,
}

/// Per-task display facts derived for one calendar cell.
#[derive(Debug, Clone)]
pub struct TaskView<'a> {
    pub task: &'a Task,
    pub is_own: bool,
    pub preview: String,
    pub attachments: Vec<AttachmentView<'a>>,
}

pub fn task_view<'a>(task: &'a Task, current_user_id: &str) -> TaskView<'a> {
    let attachments = task
        .attachments
        .iter()
        .map(|a| AttachmentView {
            attachment: a,
            display_name: display_file_name(&a.name),
            is_image: is_image(&a.name),
        })
        .collect();

    TaskView {
        task,
        is_own: task.is_owned_by(current_user_id),
        preview: description_preview(&task.description),
        attachments,
    }
}
