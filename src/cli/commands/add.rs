use crate::app::{TaskDraft, open_app, partition_oversized};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::task::Attachment;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use std::fs;
use std::path::Path;

/// Create a new task (administrator only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        subject,
        description,
        assigned,
        due,
        files,
    } = cmd
    {
        //
        // 1. Parse dates (assigned defaults to today, due to tomorrow)
        //
        let assigned_date = match assigned {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let due_date = match due {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today()
                .succ_opt()
                .ok_or_else(|| AppError::InvalidDate("tomorrow".to_string()))?,
        };

        //
        // 2. Build attachments from the local paths, in submission order
        //
        let mut attachments = Vec::new();
        for path_str in files {
            attachments.push(attachment_from_path(path_str)?);
        }

        //
        // 3. Reject oversized files per-file, keep the rest
        //
        let (valid, rejected) = partition_oversized(attachments, cfg.max_attachment_bytes());
        for name in rejected {
            warning(AppError::AttachmentTooLarge {
                name,
                limit_mb: cfg.max_attachment_mb,
            });
        }

        //
        // 4. Submit
        //
        let mut app = open_app(cfg)?;
        let id = app.create_task(TaskDraft {
            title: title.clone(),
            subject: subject.clone(),
            description: description.clone(),
            assigned_date,
            due_date,
            attachments: valid,
        })?;

        success(format!("Task {} saved ({} due {})", id, title, due_date));
    }

    Ok(())
}

fn attachment_from_path(path_str: &str) -> AppResult<Attachment> {
    let path = Path::new(path_str);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path_str.to_string());

    let size = fs::metadata(path)?.len() as i64;

    Ok(Attachment {
        name,
        url: format!("file://{}", path_str),
        size,
        storage_path: path_str.to_string(),
    })
}
