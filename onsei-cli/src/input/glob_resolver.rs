//! Corpus document resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve a document pattern to the regular files it matches
///
/// Results are sorted and deduplicated; a pattern matching no file is an
/// error.
pub fn resolve_documents(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(CliError::EmptyCorpus(pattern.to_string()).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
