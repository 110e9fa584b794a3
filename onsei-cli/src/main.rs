//! Command-line entry point for onsei

use clap::Parser;
use onsei_cli::commands::Cli;
use onsei_cli::CliResult;

fn main() -> CliResult<()> {
    Cli::parse().execute()
}
