//! Calendar helpers for the error-day report.
//!
//! The store groups log rows into ISO day keys (`YYYY-MM-DD`); the rendered
//! report prints long-form dates like `July 1, 2016`.

use chrono::{Datelike, NaiveDate};

/// Parse an ISO day key as produced by SQLite's `date()`.
pub fn parse_day(day: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
}

/// Long-form report date: full month name, unpadded day, four-digit year.
pub fn format_report_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
