use std::fs::File;
use std::path::Path;

use log::info;
use serde_json::{json, Value};

use crate::cli::BuildArgs;
use crate::error::CliError;

const TICKER_COLUMN: &str = "Ticker";
const MARKET_CAP_COLUMN: &str = "Market Cap";

pub fn run(args: &BuildArgs) -> Result<Value, CliError> {
    let mut rows: Vec<(String, String)> = Vec::new();
    for path in &args.listings {
        read_listing(path, &mut rows)?;
    }
    let row_count = rows.len();

    let index = tickex_core::build(rows);
    tickex_core::save(&index, &args.output)?;
    info!(
        "wrote snapshot with {} tickers to {}",
        index.len(),
        args.output.display(),
    );

    Ok(json!({
        "files": args.listings.len(),
        "rows": row_count,
        "indexed": index.len(),
        "snapshot": args.output.display().to_string(),
    }))
}

/// Append every (ticker, raw market cap) row of one listing file.
///
/// Row validation happens in the builder, not here: this only requires the
/// two columns to exist, so one malformed value never fails the whole file.
fn read_listing(path: &Path, rows: &mut Vec<(String, String)>) -> Result<(), CliError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|e| listing_error(path, e))?.clone();
    let ticker_column = column(path, &headers, TICKER_COLUMN)?;
    let market_cap_column = column(path, &headers, MARKET_CAP_COLUMN)?;

    for record in reader.records() {
        let record = record.map_err(|e| listing_error(path, e))?;
        let ticker = record.get(ticker_column).unwrap_or_default();
        let market_cap = record.get(market_cap_column).unwrap_or_default();
        rows.push((ticker.to_owned(), market_cap.to_owned()));
    }
    Ok(())
}

fn column(path: &Path, headers: &csv::StringRecord, name: &'static str) -> Result<usize, CliError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| CliError::MissingColumn {
            path: path.display().to_string(),
            column: name,
        })
}

fn listing_error(path: &Path, source: csv::Error) -> CliError {
    CliError::Listing {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn reads_ticker_and_market_cap_columns() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("listing.csv");
        fs::write(
            &path,
            "Ticker,Name,Market Cap\nAAPL,Apple Inc.,3000000\nGOOG,Alphabet,N/A\n",
        )
        .expect("write");

        let mut rows = Vec::new();
        read_listing(&path, &mut rows).expect("read");
        assert_eq!(
            rows,
            vec![
                ("AAPL".to_owned(), "3000000".to_owned()),
                ("GOOG".to_owned(), "N/A".to_owned()),
            ],
        );
    }

    #[test]
    fn missing_column_is_reported_with_the_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("listing.csv");
        fs::write(&path, "Symbol,Cap\nAAPL,3000000\n").expect("write");

        let err = read_listing(&path, &mut Vec::new()).expect_err("must fail");
        assert!(matches!(err, CliError::MissingColumn { column: "Ticker", .. }));
    }

    #[test]
    fn build_command_writes_a_loadable_snapshot() {
        let temp = tempdir().expect("tempdir");
        let listing = temp.path().join("listing.csv");
        fs::write(
            &listing,
            "Ticker,Market Cap\nAA,10000\nAAPL,3000000\nGOOG,N/A\n",
        )
        .expect("write");
        let snapshot = temp.path().join("tickers.json");

        let args = BuildArgs {
            listings: vec![listing],
            output: snapshot.clone(),
        };
        let summary = run(&args).expect("build");

        assert_eq!(summary["rows"], 3);
        assert_eq!(summary["indexed"], 2);
        let index = tickex_core::load(&snapshot).expect("load");
        assert_eq!(index.len(), 2);
    }
}
