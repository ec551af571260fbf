use thiserror::Error;

use tickex_core::IndexError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("listing file {path}: {source}")]
    Listing { path: String, source: csv::Error },

    #[error("listing file {path}: missing column '{column}'")]
    MissingColumn { path: String, column: &'static str },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Index(IndexError::InvalidSymbol { .. })
            | Self::Index(IndexError::InvalidMarketCap { .. }) => 2,
            Self::Index(_)
            | Self::Listing { .. }
            | Self::MissingColumn { .. }
            | Self::Serialization(_)
            | Self::Io(_) => 10,
        }
    }
}
