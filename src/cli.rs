//! Command-line surface.
//!
//! One command, no subcommands: run the report. Precedence for every setting
//! is CLI flag, then environment, then config file.

use clap::Parser;
use std::path::PathBuf;

/// Generate the logs-analysis report for a news site database.
#[derive(Parser, Debug)]
#[command(name = "newslog", version, about, long_about = None)]
pub struct Cli {
    /// SQLite database to report on (overrides the config file).
    #[arg(long, env = "NEWSLOG_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Read settings from this file instead of the default config location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the report here instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}
