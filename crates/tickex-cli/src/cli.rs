//! CLI argument definitions for tickex.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `build` | Build a snapshot from ticker-listing CSV files |
//! | `search` | Query a snapshot for ranked ticker completions |
//!
//! # Examples
//!
//! ```bash
//! # Build a snapshot from cleaned exchange listings
//! tickex build nasdaq_tickers_cleaned.csv nyse_tickers_cleaned.csv -o tickers.json
//!
//! # Autocomplete a prefix
//! tickex search aa --snapshot tickers.json --pretty
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Ticker autocomplete index builder and query tool.
#[derive(Debug, Parser)]
#[command(name = "tickex", version, about = "Ticker autocomplete index")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object output.
    Json,
    /// ASCII table format for terminal display.
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a snapshot from ticker-listing CSV files.
    Build(BuildArgs),
    /// Query a snapshot for ranked ticker completions.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Listing CSV files with `Ticker` and `Market Cap` columns.
    #[arg(required = true)]
    pub listings: Vec<PathBuf>,

    /// Where to write the snapshot.
    #[arg(long, short, default_value = "tickex.json")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Ticker prefix to complete (uppercased before lookup).
    pub prefix: String,

    /// Snapshot produced by `tickex build`.
    #[arg(long, short, default_value = "tickex.json")]
    pub snapshot: PathBuf,
}
