//! Corpus selection for the CLI

use crate::config::CorpusConfig;
use crate::error::CliError;
use crate::input::{html, FileReader};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Corpus a run analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusSource {
    /// Plain-text encyclopedia articles
    Wikipedia,
    /// HTML race commentary pages
    Ekiden,
}

impl CorpusSource {
    /// Parse the positional selector
    ///
    /// Exactly one argument naming a known corpus is accepted.
    pub fn from_args(program: &str, args: &[String]) -> Result<Self, CliError> {
        match args {
            [one] => match one.as_str() {
                "wikipedia" => Ok(CorpusSource::Wikipedia),
                "ekiden" => Ok(CorpusSource::Ekiden),
                _ => Err(CliError::InvalidArguments {
                    program: program.to_string(),
                    args: args.to_vec(),
                }),
            },
            _ => Err(CliError::InvalidArguments {
                program: program.to_string(),
                args: args.to_vec(),
            }),
        }
    }

    /// Selector name
    pub fn as_str(&self) -> &'static str {
        match self {
            CorpusSource::Wikipedia => "wikipedia",
            CorpusSource::Ekiden => "ekiden",
        }
    }

    /// Get the display name for the corpus source
    pub fn display_name(&self, config: &CorpusConfig) -> String {
        format!("{} ({})", self.as_str(), self.directory(config).display())
    }

    /// Directory holding this corpus
    pub fn directory(&self, config: &CorpusConfig) -> PathBuf {
        match self {
            CorpusSource::Wikipedia => config.wikipedia_dir.clone(),
            CorpusSource::Ekiden => config.ekiden_dir.clone(),
        }
    }

    /// Point this corpus at `dir`
    pub fn set_directory(&self, config: &mut CorpusConfig, dir: PathBuf) {
        match self {
            CorpusSource::Wikipedia => config.wikipedia_dir = dir,
            CorpusSource::Ekiden => config.ekiden_dir = dir,
        }
    }

    /// Glob pattern enumerating the corpus documents
    pub fn pattern(&self, config: &CorpusConfig) -> String {
        self.directory(config).join("*").to_string_lossy().into_owned()
    }

    /// Load the analysable text of one document
    pub fn load(&self, path: &Path, config: &CorpusConfig) -> Result<String> {
        let content = FileReader::read_text(path)?;
        match self {
            CorpusSource::Wikipedia => Ok(content),
            CorpusSource::Ekiden => html::extract_text(&content, &config.ekiden_class_prefix),
        }
    }
}
