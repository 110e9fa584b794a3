//! Onsei CLI library
//!
//! This library provides the command-line interface for computing phonetic
//! frequency statistics over Japanese corpora.

pub mod commands;
pub mod config;
pub mod corpus_source;
pub mod driver;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod tagger;

pub use error::{CliError, CliResult};
