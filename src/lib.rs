//! newslog — a plain-text analytics report over a news site's access log.
//!
//! Three questions, one document: which articles drew the most views, which
//! authors draw the most readers, and on which days more than 1% of requests
//! failed. All aggregation happens inside SQLite; this crate shapes the rows,
//! applies the documented rounding and date policies, and renders the report.
//!
//! The library splits along the same seams the binary uses:
//!
//! - [`store`] — read-only SQLite access, one connection per query
//! - [`analytics`] — the three aggregate operations and their policies
//! - [`report`] — pure text rendering plus the run-everything entry point
//! - [`config`] / [`cli`] — TOML settings and the clap surface over them

pub mod analytics;
pub mod cli;
pub mod config;
pub mod report;
pub mod store;

use anyhow::{Context, bail};
use tracing::{debug, info};

use cli::Cli;
use config::ReportConfig;
use store::Store;

/// Run the report for a parsed command line.
///
/// Resolves the database and output paths (flag over config), builds the
/// document, and writes it to the chosen sink. Any failure along the way
/// surfaces as an error; no partial report is ever written.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ReportConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ReportConfig::load().context("failed to load config")?,
    };

    let Some(db) = cli.db.clone().or_else(|| config.database.clone()) else {
        bail!(
            "no database configured: pass --db, set NEWSLOG_DB, \
             or put 'database' in the config file"
        );
    };

    let store = Store::new(&db);
    debug!(db = %db.display(), "running report");

    let document = report::build_report(&store)
        .with_context(|| format!("report failed against {}", db.display()))?;

    match cli.output.clone().or_else(|| config.output.clone()) {
        Some(path) => {
            std::fs::write(&path, &document)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(document.as_bytes())
                .context("failed to write report to stdout")?;
        }
    }

    Ok(())
}
