//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// The corpus selector was missing, repeated or unknown
    InvalidArguments {
        /// Program name as invoked
        program: String,
        /// Offending arguments
        args: Vec<String>,
    },
    /// No documents found in a corpus directory
    EmptyCorpus(String),
    /// Dictionary could not be loaded
    DictionaryError(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidArguments { program, args } if args.len() == 1 => {
                write!(f, "An invalid argument is given to {program}: {}", args[0])
            }
            CliError::InvalidArguments { program, args } => {
                write!(
                    f,
                    "Invalid arguments are given to {program}: {}",
                    args.join(" ")
                )
            }
            CliError::EmptyCorpus(dir) => write!(f, "No documents found in corpus: {dir}"),
            CliError::DictionaryError(msg) => write!(f, "Dictionary error: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
