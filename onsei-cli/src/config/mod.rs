//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use onsei_core::{AnalysisConfig, ScanMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Corpus locations
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisSection,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), CliError> {
        if self.corpus.ekiden_class_prefix.is_empty() {
            return Err(CliError::ConfigError(
                "corpus.ekiden_class_prefix must not be empty".to_string(),
            ));
        }
        self.analysis.scan_mode.parse::<ScanMode>().map_err(|e| {
            CliError::ConfigError(format!("analysis.scan_mode: {e}"))
        })?;
        Ok(())
    }
}

/// Corpus directories and extraction settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory of plain-text encyclopedia articles
    pub wikipedia_dir: PathBuf,

    /// Directory of HTML race commentary pages
    pub ekiden_dir: PathBuf,

    /// Class prefix marking commentary text in ekiden pages
    pub ekiden_class_prefix: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            wikipedia_dir: PathBuf::from("tmp/wikipedia"),
            ekiden_dir: PathBuf::from("tmp/ekiden"),
            ekiden_class_prefix: "InsertButtonToCodeBlock".to_string(),
        }
    }
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalysisSection {
    /// Keep standalone katakana nouns
    pub include_katakana_nouns: bool,

    /// Counting strategy: "linear" or "regex"
    pub scan_mode: String,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            include_katakana_nouns: false,
            scan_mode: ScanMode::default().as_str().to_string(),
        }
    }
}

impl AnalysisSection {
    /// Build the core configuration
    pub fn to_analysis_config(&self) -> onsei_core::Result<AnalysisConfig> {
        AnalysisConfig::builder()
            .include_katakana_nouns(self.include_katakana_nouns)
            .scan_mode_name(self.scan_mode.as_str())
            .build()
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty: bool,

    /// Emit the consonant combination table
    pub include_combinations: bool,
}
