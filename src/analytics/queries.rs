//! The three report queries.
//!
//! Each function builds one fully parameterized statement, hands it to the
//! [`Store`], and shapes the rows for the renderer. Joins, grouping,
//! ordering, and the error-day threshold stay in SQL where the database does
//! set work well; percentage rounding and date formatting happen here, where
//! the policy is ours and testable.
//!
//! A request counts as served when its status contains `OK` (the catalog
//! writes statuses like `200 OK` and `404 NOT FOUND`); the negation of the
//! same predicate defines an error.

use rusqlite::types::Value;
use tracing::debug;

use crate::store::{AggregateQuery, Store};

use super::dates;
use super::percent;
use super::types::{
    AnalyticsError, AnalyticsResult, ArticleViews, AuthorViews, ErrorDay, ErrorDayCounts,
};

const TOP_ARTICLES_SQL: &str = "\
SELECT a.title, COUNT(l.id) AS views
  FROM log l
  JOIN articles a ON l.path = '/article/' || a.slug
 WHERE l.status LIKE '%OK%'
 GROUP BY a.id, a.title, a.slug
 ORDER BY views DESC, a.title ASC, a.slug ASC
 LIMIT ?1";

const RANKED_AUTHORS_SQL: &str = "\
SELECT au.name, COUNT(l.id) AS total_views
  FROM authors au
  JOIN articles a ON a.author = au.id
  LEFT JOIN log l
    ON l.path = '/article/' || a.slug AND l.status LIKE '%OK%'
 GROUP BY au.id, au.name
 ORDER BY total_views DESC, au.name ASC, au.id ASC";

const ERROR_DAYS_SQL: &str = "\
SELECT date(l.time) AS day,
       SUM(CASE WHEN l.status NOT LIKE '%OK%' THEN 1 ELSE 0 END) AS errors,
       COUNT(*) AS total
  FROM log l
 GROUP BY day
HAVING SUM(CASE WHEN l.status NOT LIKE '%OK%' THEN 1 ELSE 0 END) * 100.0 / COUNT(*) > 1.0
 ORDER BY day ASC";

/// Most-viewed articles: views descending, ties broken by title then slug.
///
/// Only exact `/article/<slug>` path matches count, and only served
/// requests. Articles with zero qualifying views never appear.
pub fn top_articles(store: &Store, limit: u32) -> AnalyticsResult<Vec<ArticleViews>> {
    let query = AggregateQuery {
        tag: "top_articles",
        sql: TOP_ARTICLES_SQL,
        params: vec![Value::Integer(i64::from(limit))],
    };
    let rows: Vec<ArticleViews> = store.execute(&query)?;
    debug!(rows = rows.len(), limit, "top articles computed");
    Ok(rows)
}

/// Every author who owns at least one article, ranked by total served views.
///
/// An author whose articles drew no traffic still appears, with zero. Ties
/// break by name, then by author id so equal names stay deterministic.
pub fn ranked_authors(store: &Store) -> AnalyticsResult<Vec<AuthorViews>> {
    let query = AggregateQuery {
        tag: "ranked_authors",
        sql: RANKED_AUTHORS_SQL,
        params: Vec::new(),
    };
    let rows: Vec<AuthorViews> = store.execute(&query)?;
    debug!(rows = rows.len(), "author ranking computed");
    Ok(rows)
}

/// Days whose raw error share exceeded 1% of requests, oldest first.
///
/// The threshold compares the unrounded ratio, so a 1.04% day is kept and
/// renders as `1.0`. The store returns per-day counts; division and rounding
/// happen here under [`percent::round1`]'s policy.
pub fn error_days(store: &Store) -> AnalyticsResult<Vec<ErrorDay>> {
    let query = AggregateQuery {
        tag: "error_days",
        sql: ERROR_DAYS_SQL,
        params: Vec::new(),
    };
    let counts: Vec<ErrorDayCounts> = store.execute(&query)?;

    let mut days = Vec::with_capacity(counts.len());
    for c in counts {
        let date = dates::parse_day(&c.day).map_err(|e| AnalyticsError::Row {
            operation: "error_days",
            detail: format!("bad day key '{}': {e}", c.day),
        })?;
        // A day with no requests has no defined rate.
        let Some(raw) = percent::error_rate(c.errors, c.total) else {
            continue;
        };
        days.push(ErrorDay {
            date: dates::format_report_date(date),
            percentage: percent::round1(raw),
        });
    }
    debug!(rows = days.len(), "error days computed");
    Ok(days)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
