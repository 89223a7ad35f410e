//! Transient user-facing notices. Every failure path surfaces one of
//! these and returns control to the caller; nothing here is fatal.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

#[derive(Debug, Clone, Copy)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

pub fn alert<T: fmt::Display>(kind: AlertKind, msg: T) {
    let (color, icon) = match kind {
        AlertKind::Info => (FG_BLUE, ICON_INFO),
        AlertKind::Success => (FG_GREEN, ICON_OK),
        AlertKind::Warning => (FG_YELLOW, ICON_WARN),
        AlertKind::Error => (FG_RED, ICON_ERR),
    };

    if matches!(kind, AlertKind::Error) {
        eprintln!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    } else {
        println!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    alert(AlertKind::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    alert(AlertKind::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    alert(AlertKind::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    alert(AlertKind::Error, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}{}====================== {}\n{}",
        FG_BLUE, BOLD, msg, RESET
    );
}
