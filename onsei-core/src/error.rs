//! Error types for the phonetic pipeline

use thiserror::Error;

/// Errors raised while configuring or driving an analysis
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown scan mode name
    #[error("Unknown scan mode: {0} (expected `linear` or `regex`)")]
    UnknownScanMode(String),

    /// A pattern family failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The morphological tagger failed on a document
    #[error("Tagger error: {0}")]
    Tagger(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
