mod build;
mod search;

use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<Value, CliError> {
    match &cli.command {
        Command::Build(args) => build::run(args),
        Command::Search(args) => search::run(args),
    }
}
