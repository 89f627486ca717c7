//! Plain-text rendering of the report document.
//!
//! [`render_report`] is pure: rows in, one `String` out, no I/O and no
//! arithmetic beyond formatting. [`build_report`] runs the three queries in
//! section order and aborts on the first failure — a partial document never
//! leaves this module.

use std::fmt::Write as _;

use tracing::debug;

use crate::analytics::{self, AnalyticsResult, ArticleViews, AuthorViews, ErrorDay};
use crate::store::Store;

/// Title line of the report document.
pub const REPORT_TITLE: &str = "Logs Analysis:";
/// Section one header.
pub const TOP_ARTICLES_HEADER: &str = "1. Most Popular Articles:";
/// Section two header.
pub const TOP_AUTHORS_HEADER: &str = "2. Most Popular Authors:";
/// Section three header.
pub const ERROR_DAYS_HEADER: &str = "3. More than 1% of requests led to errors on:";

/// How many articles section one shows.
pub const TOP_ARTICLES_LIMIT: u32 = 3;

/// Render the full document.
///
/// Layout: title line, one blank line before section one, two blank lines
/// before sections two and three. Every row line ends in a newline; an empty
/// section is just its header.
pub fn render_report(
    articles: &[ArticleViews],
    authors: &[AuthorViews],
    days: &[ErrorDay],
) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');

    out.push('\n');
    out.push_str(TOP_ARTICLES_HEADER);
    out.push('\n');
    for a in articles {
        let _ = writeln!(out, "{} - {} views", a.title, a.views);
    }

    out.push_str("\n\n");
    out.push_str(TOP_AUTHORS_HEADER);
    out.push('\n');
    for a in authors {
        let _ = writeln!(out, "{} - {} views", a.name, a.total_views);
    }

    out.push_str("\n\n");
    out.push_str(ERROR_DAYS_HEADER);
    out.push('\n');
    for d in days {
        let _ = writeln!(out, "{} - {:.1}% requests", d.date, d.percentage);
    }

    out
}

/// Run the three queries and render the document.
pub fn build_report(store: &Store) -> AnalyticsResult<String> {
    let articles = analytics::top_articles(store, TOP_ARTICLES_LIMIT)?;
    let authors = analytics::ranked_authors(store)?;
    let days = analytics::error_days(store)?;
    debug!(
        articles = articles.len(),
        authors = authors.len(),
        days = days.len(),
        "report sections ready"
    );
    Ok(render_report(&articles, &authors, &days))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
