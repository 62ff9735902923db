//! Calendar-date helpers
//!
//! Every date in the engine is a `NaiveDate`: no time-of-day and no time
//! zone, so subtracting two dates always yields a whole number of days.

use chrono::{Datelike, NaiveDate};

use crate::constants::{DATE_FORMAT, MONTH_LABEL_FORMAT};
use crate::{MonthKey, PlantaoError, Result};

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `PlantaoError::Validation` when the text is not a real date
/// (e.g. `2024-02-30`).
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| PlantaoError::Validation(format!("Invalid date '{value}': {e}")))
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// `count` consecutive dates starting at `start`.
pub fn date_range(start: NaiveDate, count: u32) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take(count as usize)
}

/// Human label for a month bucket, e.g. `Mar 2024`.
pub fn month_label(month: MonthKey) -> String {
    month.first_day().map_or_else(
        || month.to_string(),
        |day| day.format(MONTH_LABEL_FORMAT).to_string(),
    )
}

/// Calendar year of a date.
pub fn year_of(date: NaiveDate) -> i32 {
    date.year()
}
