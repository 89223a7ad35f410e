//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Byte count as MB with two decimals, e.g. "1.25 MB".
pub fn size_mb(bytes: i64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// One-decimal percentage suffix used by the report view, e.g. "(66.7%)".
pub fn pct_label(value: f64) -> String {
    format!("({:.1}%)", value)
}
