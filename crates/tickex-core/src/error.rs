use std::path::PathBuf;

use thiserror::Error;

/// Error taxonomy for the ticker index.
///
/// `insert` and `search` surface validation failures to the caller instead
/// of coercing, so the builder's skip-and-log policy stays one layer up.
/// None of these kinds is retried; an empty search result is `Ok(None)`,
/// never an error.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid ticker symbol '{symbol}': expected non-empty uppercase A-Z")]
    InvalidSymbol { symbol: String },

    #[error("invalid market cap '{value}' for '{symbol}'")]
    InvalidMarketCap { symbol: String, value: String },

    #[error("snapshot not found: {0}")]
    NotFound(PathBuf),

    #[error("corrupt snapshot: {0}")]
    CorruptIndex(String),
}
