//! Analyze command implementation

use crate::config::CliConfig;
use crate::corpus_source::CorpusSource;
use crate::driver::CorpusDriver;
use crate::error::CliError;
use crate::input::{resolve_documents, FileReader};
use crate::output::{JsonFormatter, StatsReport};
use crate::progress::ProgressReporter;
use crate::tagger::{self, VibratoTagger};
use anyhow::{Context, Result};
use clap::Args;
use onsei_core::{Analyzer, ScanMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for corpus analysis
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Corpus to analyse: wikipedia or ekiden
    #[arg(value_name = "CORPUS")]
    pub source: Vec<String>,

    /// System dictionary for the tagger (zstd-compressed if it ends in .zst)
    #[arg(short, long, value_name = "FILE", env = "ONSEI_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read the selected corpus from DIR instead of the configured directory
    #[arg(long, value_name = "DIR")]
    pub corpus_dir: Option<PathBuf>,

    /// Keep standalone katakana nouns
    #[arg(long)]
    pub include_katakana_nouns: bool,

    /// Counting strategy: linear or regex
    #[arg(long, value_name = "MODE")]
    pub scan_mode: Option<ScanMode>,

    /// Also emit the consonant combination table
    #[arg(long)]
    pub include_combinations: bool,

    /// Pretty print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,
}

impl AnalyzeArgs {
    /// Configuration file contents with command-line overrides applied
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if self.include_katakana_nouns {
            config.analysis.include_katakana_nouns = true;
        }
        if let Some(mode) = self.scan_mode {
            config.analysis.scan_mode = mode.as_str().to_string();
        }
        if self.include_combinations {
            config.output.include_combinations = true;
        }
        if self.pretty {
            config.output.pretty = true;
        }
        if let Some(threads) = self.threads {
            config.performance.worker_threads = threads;
        }

        Ok(config)
    }

    /// Execute the analysis
    pub fn execute(&self, program: &str, mut config: CliConfig, quiet: bool) -> Result<()> {
        let source = CorpusSource::from_args(program, &self.source)?;
        if let Some(dir) = &self.corpus_dir {
            source.set_directory(&mut config.corpus, dir.clone());
        }
        log::info!("Analysing corpus {}", source.display_name(&config.corpus));

        let analysis = config
            .analysis
            .to_analysis_config()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let analyzer = Analyzer::new(analysis)?;
        log::debug!("{analyzer:?}");

        let documents = resolve_documents(&source.pattern(&config.corpus))?;
        let total_bytes = FileReader::total_size(&documents)?;
        log::info!("Found {} documents ({total_bytes} bytes)", documents.len());

        let dictionary_path = self.dictionary.as_ref().ok_or_else(|| {
            CliError::DictionaryError(
                "no dictionary given; use --dictionary or ONSEI_DICTIONARY".to_string(),
            )
        })?;
        let tokenizer = tagger::tokenizer(tagger::load_dictionary(dictionary_path)?);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(worker_threads(config.performance.worker_threads))
            .build()
            .context("Failed to start worker threads")?;

        let mut progress = ProgressReporter::new(quiet);
        progress.init_documents(documents.len() as u64);

        let driver = CorpusDriver::new(source, &config.corpus, &analyzer);
        let counts = pool.install(|| {
            driver.run(&documents, || VibratoTagger::new(&tokenizer), &progress)
        })?;
        progress.finish();

        let report = StatsReport::from_counts(&counts, config.output.include_combinations);
        self.write_report(&report, config.output.pretty)
    }

    fn write_report(&self, report: &StatsReport, pretty: bool) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };

        JsonFormatter::new(writer, pretty).write_report(report)
    }
}

/// Resolve a configured thread count, 0 meaning one per CPU
fn worker_threads(configured: usize) -> usize {
    if configured == 0 {
        num_cpus::get()
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Cli;
    use clap::Parser;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> AnalyzeArgs {
        let mut argv = vec!["onsei"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().analyze
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[analysis]\nscan_mode = \"regex\"\n[performance]\nworker_threads = 2"
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let args = parse(&[
            "wikipedia",
            "--config",
            &path,
            "--scan-mode",
            "linear",
            "--include-katakana-nouns",
            "--pretty",
        ]);
        let config = args.effective_config().unwrap();

        assert_eq!(config.analysis.scan_mode, "linear");
        assert!(config.analysis.include_katakana_nouns);
        assert!(config.output.pretty);
        assert_eq!(config.performance.worker_threads, 2);
    }

    #[test]
    fn test_defaults_without_config_file() {
        let config = parse(&["ekiden"]).effective_config().unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_invalid_selector_fails_before_loading_anything() {
        let args = parse(&["aozora"]);
        let err = args
            .execute("onsei", CliConfig::default(), true)
            .unwrap_err();
        assert_eq!(err.to_string(), "An invalid argument is given to onsei: aozora");
    }

    #[test]
    fn test_missing_dictionary_is_reported() {
        let corpus = tempfile::TempDir::new().unwrap();
        std::fs::write(corpus.path().join("a.txt"), "猫").unwrap();
        let dir = corpus.path().to_string_lossy().into_owned();

        let mut args = parse(&["wikipedia", "--corpus-dir", &dir]);
        args.dictionary = None;
        let err = args
            .execute("onsei", CliConfig::default(), true)
            .unwrap_err();
        assert!(err.to_string().starts_with("Dictionary error: no dictionary given"));
    }

    #[test]
    fn test_worker_threads() {
        assert_eq!(worker_threads(3), 3);
        assert!(worker_threads(0) >= 1);
    }
}
