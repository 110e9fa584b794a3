//! Analysis configuration

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pattern occurrences are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Single pass over the code string with state-indexed counters
    #[default]
    Linear,
    /// One compiled regular expression per key
    Regex,
}

impl ScanMode {
    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Linear => "linear",
            ScanMode::Regex => "regex",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ScanMode::Linear),
            "regex" => Ok(ScanMode::Regex),
            _ => Err(Error::UnknownScanMode(s.to_string())),
        }
    }
}

/// Settings shared by every document of an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisConfig {
    pub(crate) include_katakana_nouns: bool,
    pub(crate) scan_mode: ScanMode,
}

impl AnalysisConfig {
    /// Create a configuration builder
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Whether nouns whose dictionary form ends in katakana become phrase units
    pub fn include_katakana_nouns(&self) -> bool {
        self.include_katakana_nouns
    }

    /// Counting strategy
    pub fn scan_mode(&self) -> ScanMode {
        self.scan_mode
    }
}

/// Fluent builder for [`AnalysisConfig`]
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    include_katakana_nouns: Option<bool>,
    scan_mode: Option<String>,
}

impl AnalysisConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep standalone katakana loanword nouns
    pub fn include_katakana_nouns(mut self, include: bool) -> Self {
        self.include_katakana_nouns = Some(include);
        self
    }

    /// Set the scan mode
    pub fn scan_mode(mut self, mode: ScanMode) -> Self {
        self.scan_mode = Some(mode.as_str().to_string());
        self
    }

    /// Set the scan mode by name
    pub fn scan_mode_name(mut self, name: impl Into<String>) -> Self {
        self.scan_mode = Some(name.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalysisConfig, Error> {
        let mut config = AnalysisConfig::default();

        if let Some(include) = self.include_katakana_nouns {
            config.include_katakana_nouns = include;
        }

        if let Some(name) = self.scan_mode {
            config.scan_mode = name.parse()?;
        }

        Ok(config)
    }
}
