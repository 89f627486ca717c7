//! Read-only SQLite access for the report queries.
//!
//! The store holds only the database path. Every call to [`Store::execute`]
//! opens a fresh read-only connection, runs exactly one fully parameterized
//! statement, decodes the rows, and drops the connection before returning —
//! on the error paths too. Nothing here inspects the SQL it is given; the
//! statements live next to the operations that own them in
//! [`crate::analytics::queries`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Row, params_from_iter};
use thiserror::Error;
use tracing::debug;

/// How long a query waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors from running a report query against the database.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open database '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query '{tag}' failed: {source}")]
    Query {
        tag: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query '{tag}' returned a row the caller cannot decode: {source}")]
    Decode {
        tag: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

/// Convenience alias.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// One aggregate statement: a tag for diagnostics, static SQL, and the values
/// bound to its placeholders.
#[derive(Debug, Clone)]
pub struct AggregateQuery {
    pub tag: &'static str,
    pub sql: &'static str,
    pub params: Vec<Value>,
}

/// Decode a single result row into a typed value.
pub trait FromAggregateRow: Sized {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Handle on the news database.
///
/// Cloning is cheap; connections are never shared or cached, so two handles
/// on the same path never observe each other.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one aggregate query and decode every row, in statement order.
    pub fn execute<T: FromAggregateRow>(&self, query: &AggregateQuery) -> StoreResult<Vec<T>> {
        let started = std::time::Instant::now();
        let conn = self.open()?;

        let mut stmt = conn.prepare(query.sql).map_err(|e| StoreError::Query {
            tag: query.tag,
            source: e,
        })?;

        let mapped = stmt
            .query_map(params_from_iter(query.params.iter()), |row| {
                T::from_row(row)
            })
            .map_err(|e| StoreError::Query {
                tag: query.tag,
                source: e,
            })?;

        let mut rows = Vec::new();
        for row in mapped {
            rows.push(row.map_err(|e| classify_row_error(query.tag, e))?);
        }

        debug!(
            tag = query.tag,
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "aggregate query finished"
        );
        Ok(rows)
    }

    /// Open a read-only connection. A missing file is an [`StoreError::Open`],
    /// never an implicitly created empty database.
    fn open(&self) -> StoreResult<Connection> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| StoreError::Open {
                path: self.path.clone(),
                source: e,
            })?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(|e| StoreError::Open {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(conn)
    }
}

/// Split row-mapping failures into "the row shape is wrong" (Decode) versus
/// everything else the engine can throw mid-iteration (Query).
fn classify_row_error(tag: &'static str, err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::InvalidColumnIndex(..)
        | rusqlite::Error::InvalidColumnName(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => StoreError::Decode { tag, source: err },
        other => StoreError::Query {
            tag,
            source: other,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
