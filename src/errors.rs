//! Unified application error type.
//! All modules (db, core, cli, notify) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Store migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid task status: {0}")]
    InvalidStatus(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    #[error("Attachment '{name}' exceeds the {limit_mb} MB limit")]
    AttachmentTooLarge { name: String, limit_mb: u64 },

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("Reminder dispatch error: {0}")]
    Reminder(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
