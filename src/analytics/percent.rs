//! Percentage math for the error-day report.
//!
//! Division is safe against zero denominators, and rounding is pinned to one
//! policy so the rendered numbers never depend on what a particular SQLite
//! build does with ties.

/// Raw error share of a day's traffic, as a percentage.
///
/// `None` when the day has no requests at all; such a day has no defined
/// rate and is excluded from the report.
pub fn error_rate(errors: i64, total: i64) -> Option<f64> {
    if total <= 0 {
        None
    } else {
        Some((errors as f64 / total as f64) * 100.0)
    }
}

/// Round to one decimal place, ties away from zero.
///
/// `f64::round` rounds half away from zero, so 2.25 lands on 2.3 rather than
/// the bankers' 2.2. Idempotent on already-rounded values.
pub fn round1(pct: f64) -> f64 {
    (pct * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
