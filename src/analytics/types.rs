//! Result rows and the error type for the report queries.
//!
//! Each row struct decodes itself from a store row via
//! [`FromAggregateRow`], keeping column positions next to the struct they
//! fill rather than inside the query functions.

use rusqlite::Row;

use crate::store::{FromAggregateRow, StoreError};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Report-query error.
#[derive(Debug)]
pub enum AnalyticsError {
    /// The store failed to run or decode a query.
    Store(StoreError),
    /// A row came back well-typed but semantically unusable (e.g. a day key
    /// that is not a date).
    Row {
        operation: &'static str,
        detail: String,
    },
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(e) => write!(f, "{e}"),
            Self::Row { operation, detail } => {
                write!(f, "{operation} returned an unusable row: {detail}")
            }
        }
    }
}

impl std::error::Error for AnalyticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Row { .. } => None,
        }
    }
}

impl From<StoreError> for AnalyticsError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Convenience alias.
pub type AnalyticsResult<T> = std::result::Result<T, AnalyticsError>;

// ---------------------------------------------------------------------------
// Result rows
// ---------------------------------------------------------------------------

/// One article with its count of successfully served views.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleViews {
    pub title: String,
    pub views: i64,
}

impl FromAggregateRow for ArticleViews {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            title: row.get(0)?,
            views: row.get(1)?,
        })
    }
}

/// One author with total views summed across all of their articles.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorViews {
    pub name: String,
    pub total_views: i64,
}

impl FromAggregateRow for AuthorViews {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            total_views: row.get(1)?,
        })
    }
}

/// Raw per-day traffic counts as the store hands them back.
/// [`super::queries::error_days`] turns these into [`ErrorDay`] rows.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ErrorDayCounts {
    /// ISO day key, `YYYY-MM-DD`.
    pub day: String,
    pub errors: i64,
    pub total: i64,
}

impl FromAggregateRow for ErrorDayCounts {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            day: row.get(0)?,
            errors: row.get(1)?,
            total: row.get(2)?,
        })
    }
}

/// One calendar day whose error share exceeded the reporting threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDay {
    /// Long-form date, e.g. `July 1, 2016`.
    pub date: String,
    /// Share of requests that failed, already rounded to one decimal.
    pub percentage: f64,
}
