//! Calendar-date parsing, boundary comparison, and display formatting.
//!
//! Dates are compared as calendar days (year/month/day), never as instants:
//! a value timestamped 23:59 today and one timestamped 00:01 today fall on
//! the same day for the today-or-later rule. The reference day is injected
//! by callers so the boundary is testable without a clock.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

use crate::errors::InvalidDate;

/// Display format for dates in responses.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parse a date-like string into a calendar date, discarding time-of-day.
///
/// Accepts RFC 3339 datetimes (`2026-08-25T14:30:00Z`,
/// `2026-08-25T14:30:00+02:00`), naive datetimes with `T` or space
/// separators, and plain `YYYY-MM-DD` dates.
///
/// # Errors
///
/// Returns `InvalidDate` if the input matches none of the accepted forms or
/// names an impossible date such as `2026-02-30`.
pub fn to_calendar_date(input: &str) -> Result<NaiveDate, InvalidDate> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| InvalidDate {
        input: input.to_string(),
    })
}

/// True iff `candidate` falls on or after `today`.
#[must_use]
pub fn is_today_or_later(candidate: NaiveDate, today: NaiveDate) -> bool {
    candidate >= today
}

/// The evaluator's current calendar date (local clock).
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a calendar date for responses (`DD/MM/YYYY`).
#[must_use]
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format an instant for responses (`DD/MM/YYYY`), dropping time-of-day.
#[must_use]
pub fn format_display_instant(instant: DateTime<Utc>) -> String {
    format_display(instant.date_naive())
}

/// Option-mapping form of [`format_display`]: absent stays absent, never fails.
#[must_use]
pub fn format_display_opt(date: Option<NaiveDate>) -> Option<String> {
    date.map(format_display)
}
