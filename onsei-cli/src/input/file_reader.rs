//! Corpus document reading

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads corpus documents as UTF-8
pub struct FileReader;

impl FileReader {
    /// Read a document as UTF-8 text
    ///
    /// A leading byte order mark is dropped and CRLF line endings become LF.
    pub fn read_text(path: &Path) -> Result<String> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
        if text.contains('\r') {
            Ok(text.replace("\r\n", "\n"))
        } else {
            Ok(text.to_string())
        }
    }

    /// Combined size of `paths` in bytes
    pub fn total_size(paths: &[PathBuf]) -> Result<u64> {
        paths.iter().try_fold(0u64, |total, path| {
            let len = fs::metadata(path)
                .with_context(|| format!("Failed to stat document: {}", path.display()))?
                .len();
            Ok(total + len)
        })
    }
}
