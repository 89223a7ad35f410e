//! Calendar date utilities: parsing YYYY-MM-DD, month arithmetic for the
//! grid builder. Months are handled as zero-based indexes (0 = January)
//! throughout the core, matching the displayed-month cursor.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()
}

/// Number of days in the given month (leap years via native calendar
/// arithmetic: day 1 of the next month, stepped back one day).
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month) = if month0 >= 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday index of day 1 of the month, with Sunday = 0. This is the
/// number of blank padding cells before the first numbered cell.
pub fn first_weekday_offset(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Header label for the displayed month, e.g. "September 2026".
pub fn month_label(year: i32, month0: u32) -> String {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{}", year, month0 + 1))
}
