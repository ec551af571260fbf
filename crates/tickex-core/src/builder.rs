//! Batch construction of a [`TickerIndex`] from raw listing rows.

use log::{info, warn};

use crate::error::IndexError;
use crate::trie::TickerIndex;

/// Sentinel used by upstream listing files for an unknown market cap.
const MARKET_CAP_UNKNOWN: &str = "N/A";

/// Build an index from (ticker, raw market cap) pairs.
///
/// Listing feeds are batch and best-effort: a row with a bad symbol, an
/// unparseable market cap, or the `N/A` sentinel is skipped with a warning
/// and never aborts the build. Pure function of its input; no I/O.
pub fn build<I, S, C>(pairs: I) -> TickerIndex
where
    I: IntoIterator<Item = (S, C)>,
    S: AsRef<str>,
    C: AsRef<str>,
{
    let mut index = TickerIndex::new();
    let mut skipped = 0usize;

    for (ticker, raw_cap) in pairs {
        let ticker = ticker.as_ref();
        if let Err(error) = insert_listing(&mut index, ticker, raw_cap.as_ref()) {
            skipped += 1;
            warn!("skipping listing '{ticker}': {error}");
        }
    }

    info!("indexed {} tickers, skipped {skipped} rows", index.len());
    index
}

fn insert_listing(index: &mut TickerIndex, ticker: &str, raw_cap: &str) -> Result<(), IndexError> {
    let market_cap = parse_market_cap(ticker, raw_cap)?;
    index.insert(ticker, market_cap)
}

/// Parse a raw market cap field.
///
/// Upstream feeds mix integer and float renderings (`"1234"`, `"1234.0"`),
/// so the value is parsed as a float and truncated. The `N/A` sentinel,
/// empty fields, and negative or non-finite values are all rejected as
/// [`IndexError::InvalidMarketCap`].
pub fn parse_market_cap(symbol: &str, raw: &str) -> Result<i64, IndexError> {
    let invalid = || IndexError::InvalidMarketCap {
        symbol: symbol.to_owned(),
        value: raw.to_owned(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(MARKET_CAP_UNKNOWN) {
        return Err(invalid());
    }

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 || value > i64::MAX as f64 {
        return Err(invalid());
    }
    Ok(value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_index_from_valid_pairs() {
        let index = build(vec![("AAPL", "3000000"), ("MSFT", "2800000")]);
        assert_eq!(index.len(), 2);
        let results = index.search("MS").expect("valid prefix").expect("hits");
        assert_eq!(results, vec![("MSFT".to_owned(), 2_800_000)]);
    }

    #[test]
    fn skips_invalid_rows_without_aborting() {
        let index = build(vec![
            ("AAPL", "3000000"),
            ("????", "100"),     // bad symbol
            ("GOOG", "N/A"),     // unknown cap sentinel
            ("MSFT", "-5"),      // negative
            ("TSLA", "soon"),    // unparseable
            ("AMZN", "1500000"),
        ]);
        assert_eq!(
            index.entries(),
            vec![("AAPL".to_owned(), 3_000_000), ("AMZN".to_owned(), 1_500_000)],
        );
    }

    #[test]
    fn parses_float_renderings_by_truncating() {
        assert_eq!(parse_market_cap("AAPL", "1234.0").expect("parses"), 1234);
        assert_eq!(parse_market_cap("AAPL", "1234.9").expect("parses"), 1234);
        assert_eq!(parse_market_cap("AAPL", " 42 ").expect("parses"), 42);
    }

    #[test]
    fn rejects_sentinel_and_malformed_caps() {
        for raw in ["N/A", "n/a", "", "  ", "NaN", "inf", "-1", "1e300"] {
            let err = parse_market_cap("AAPL", raw).expect_err("must fail");
            assert!(matches!(err, IndexError::InvalidMarketCap { .. }), "{raw:?}");
        }
    }

    #[test]
    fn later_rows_overwrite_earlier_duplicates() {
        let index = build(vec![("AA", "1"), ("AA", "2")]);
        assert_eq!(index.entries(), vec![("AA".to_owned(), 2)]);
    }
}
