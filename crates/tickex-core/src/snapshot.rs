//! Versioned on-disk snapshot of a [`TickerIndex`].
//!
//! The snapshot is the only contract between the offline build and the
//! serving process: `build` writes it once, startup loads it wholesale.
//! Tickers are serialized in symbol order so equal indexes produce
//! identical bytes.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::trie::TickerIndex;

/// Format version written into every snapshot; bump on layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    version: u32,
    tickers: Vec<(String, u64)>,
}

/// Write the index to `path`, creating parent directories as needed.
pub fn save(index: &TickerIndex, path: &Path) -> Result<(), IndexError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|error| corrupt(path, error))?;
        }
    }

    let snapshot = SnapshotFile {
        version: SNAPSHOT_VERSION,
        tickers: index.entries(),
    };
    let file = File::create(path).map_err(|error| corrupt(path, error))?;
    serde_json::to_writer(BufWriter::new(file), &snapshot)
        .map_err(|error| corrupt(path, error))?;
    Ok(())
}

/// Load an index from `path`.
///
/// A missing file is [`IndexError::NotFound`]; everything else that keeps
/// the snapshot from becoming a valid index (unreadable file, bad JSON,
/// unsupported version, entries that fail validation) is
/// [`IndexError::CorruptIndex`] with the cause attached.
pub fn load(path: &Path) -> Result<TickerIndex, IndexError> {
    if !path.exists() {
        return Err(IndexError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|error| corrupt(path, error))?;
    let snapshot: SnapshotFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|error| corrupt(path, error))?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(corrupt(
            path,
            format!("unsupported snapshot version {}", snapshot.version),
        ));
    }

    let mut index = TickerIndex::new();
    for (ticker, market_cap) in snapshot.tickers {
        let market_cap = i64::try_from(market_cap).map_err(|error| corrupt(path, error))?;
        index
            .insert(&ticker, market_cap)
            .map_err(|error| corrupt(path, error))?;
    }
    Ok(index)
}

fn corrupt(path: &Path, cause: impl Display) -> IndexError {
    IndexError::CorruptIndex(format!("{}: {cause}", path.display()))
}
