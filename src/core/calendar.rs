//! Month grid builder: the ordered cell sequence behind the calendar view
//! (leading blanks for the partial first week, then numbered days).

use crate::utils::date;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Padding before the first weekday of the month.
    Blank,
    /// A numbered day, 1..=days_in_month.
    Day(u32),
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month0: u32, // zero-based month index (0 = January)
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub cells: Vec<Cell>,
}

/// Build the ordered cell list for (year, zero-based month): one blank per
/// weekday preceding day 1 (Sunday = 0), then every day of the month.
pub fn month_grid(year: i32, month0: u32) -> MonthGrid {
    let leading_blanks = date::first_weekday_offset(year, month0);
    let days_in_month = date::days_in_month(year, month0);

    let mut cells = Vec::with_capacity((leading_blanks + days_in_month) as usize);
    for _ in 0..leading_blanks {
        cells.push(Cell::Blank);
    }
    for day in 1..=days_in_month {
        cells.push(Cell::Day(day));
    }

    MonthGrid {
        year,
        month0,
        leading_blanks,
        days_in_month,
        cells,
    }
}

/// True iff day, month and year all equal the reference date's components.
pub fn is_same_day(day: u32, month0: u32, year: i32, reference: NaiveDate) -> bool {
    day == reference.day() && month0 == reference.month0() && year == reference.year()
}

/// Convenience wrapper against the current date.
pub fn is_today(day: u32, month0: u32, year: i32) -> bool {
    is_same_day(day, month0, year, date::today())
}

/// The displayed month/year owned by the top-level state container.
/// Navigation wraps across year boundaries (Jan ← Dec, Dec → Jan).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub month0: u32,
    pub year: i32,
}

impl MonthCursor {
    pub fn current() -> Self {
        let today = date::today();
        Self {
            month0: today.month0(),
            year: today.year(),
        }
    }

    pub fn prev(&mut self) {
        if self.month0 == 0 {
            self.month0 = 11;
            self.year -= 1;
        } else {
            self.month0 -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.month0 == 11 {
            self.month0 = 0;
            self.year += 1;
        } else {
            self.month0 += 1;
        }
    }

    pub fn label(&self) -> String {
        date::month_label(self.year, self.month0)
    }

    pub fn grid(&self) -> MonthGrid {
        month_grid(self.year, self.month0)
    }
}
