use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(data: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(data),
    }

    Ok(())
}

fn render_table(data: &Value) {
    match data.get("results").and_then(Value::as_array) {
        Some(results) if results.is_empty() => println!("(no results)"),
        Some(results) => {
            println!("{:<8} {:>20}", "TICKER", "MARKET CAP");
            for row in results {
                let ticker = row.get(0).and_then(Value::as_str).unwrap_or("?");
                let market_cap = row.get(1).and_then(Value::as_u64).unwrap_or(0);
                println!("{ticker:<8} {market_cap:>20}");
            }
        }
        // Build summaries and other objects render as key/value lines.
        None => {
            for (key, value) in data.as_object().into_iter().flatten() {
                println!("{key}: {value}");
            }
        }
    }
}
