//! Ticker autocomplete index.
//!
//! This crate contains:
//! - An arena-backed prefix trie over stock ticker symbols, ranked by
//!   market capitalization ([`TickerIndex`])
//! - A best-effort batch builder over raw listing rows ([`build`])
//! - A versioned on-disk snapshot format ([`save`] / [`load`])
//!
//! The index is built once per data refresh, serialized, and loaded
//! wholesale at startup. After loading it is read-only: share it across
//! request handlers as `Arc<TickerIndex>` and model a refresh as building a
//! new index and swapping the shared handle. In-flight readers keep the old
//! instance until they finish.

pub mod builder;
pub mod error;
pub mod snapshot;
pub mod trie;

pub use builder::{build, parse_market_cap};
pub use error::IndexError;
pub use snapshot::{load, save, SNAPSHOT_VERSION};
pub use trie::{TickerIndex, TOP_COMPLETIONS};
