//! CLI command implementations

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub mod analyze;
pub mod generate_config;

pub use analyze::AnalyzeArgs;

/// Phonetic frequency statistics for Japanese corpora
#[derive(Debug, Parser)]
#[command(name = "onsei", version, about, long_about = None)]
pub struct Cli {
    /// Analysis arguments
    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    /// Write the effective configuration as TOML to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub write_config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the invocation
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet)?;
        log::debug!("Arguments: {:?}", self);

        let config = self.analyze.effective_config()?;
        match &self.write_config {
            Some(path) => generate_config::write_config(&config, path),
            None => self.analyze.execute(&program_name(), config, self.quiet),
        }
    }
}

/// Program name as invoked
fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| clap::crate_name!().to_string())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()?;
    }

    Ok(())
}
