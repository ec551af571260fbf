use serde_json::{json, Value};

use crate::cli::SearchArgs;
use crate::error::CliError;

pub fn run(args: &SearchArgs) -> Result<Value, CliError> {
    let index = tickex_core::load(&args.snapshot)?;

    // The index itself does not normalize case; uppercase here.
    let prefix = args.prefix.trim().to_ascii_uppercase();
    let results = index.search(&prefix)?.unwrap_or_default();

    Ok(json!({
        "prefix": prefix,
        "results": results,
    }))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    fn snapshot_with_samples() -> (tempfile::TempDir, PathBuf) {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("tickers.json");
        let index = tickex_core::build(vec![("AA", "10000"), ("AAPL", "3000000")]);
        tickex_core::save(&index, &path).expect("save");
        (temp, path)
    }

    #[test]
    fn uppercases_user_input_before_lookup() {
        let (_temp, snapshot) = snapshot_with_samples();
        let args = SearchArgs {
            prefix: " aa ".to_owned(),
            snapshot,
        };
        let data = run(&args).expect("search");
        assert_eq!(data["prefix"], "AA");
        assert_eq!(data["results"][0], json!(["AA", 10_000]));
        assert_eq!(data["results"][1], json!(["AAPL", 3_000_000]));
    }

    #[test]
    fn no_match_renders_an_empty_result_not_an_error() {
        let (_temp, snapshot) = snapshot_with_samples();
        let args = SearchArgs {
            prefix: "ZZZ".to_owned(),
            snapshot,
        };
        let data = run(&args).expect("search");
        assert_eq!(data["results"], json!([]));
    }

    #[test]
    fn missing_snapshot_maps_to_runtime_exit_code() {
        let temp = tempdir().expect("tempdir");
        let args = SearchArgs {
            prefix: "AA".to_owned(),
            snapshot: temp.path().join("absent.json"),
        };
        let err = run(&args).expect_err("must fail");
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn invalid_prefix_maps_to_validation_exit_code() {
        let (_temp, snapshot) = snapshot_with_samples();
        let args = SearchArgs {
            prefix: "A1".to_owned(),
            snapshot,
        };
        let err = run(&args).expect_err("must fail");
        assert!(matches!(err, CliError::Index(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
