//! Aggregate queries over the news database.
//!
//! Everything the report needs to know comes out of three operations, each a
//! free function over a [`Store`](crate::store::Store) handle returning typed
//! rows.
//!
//! # Module structure
//!
//! - [`types`] — result rows, error type
//! - [`queries`] — the three SQL operations
//! - [`percent`] — safe division and the one-decimal rounding policy
//! - [`dates`] — ISO day keys ↔ long-form report dates

pub mod dates;
pub mod percent;
pub mod queries;
pub mod types;

// Re-export the most commonly used items at the crate::analytics level.
pub use queries::{error_days, ranked_authors, top_articles};
pub use types::{AnalyticsError, AnalyticsResult, ArticleViews, AuthorViews, ErrorDay};
