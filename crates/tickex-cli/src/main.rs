mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let data = commands::run(&cli)?;
    output::render(&data, cli.format, cli.pretty)
}
