//! Parallel corpus analysis
//!
//! Documents are analysed independently on a rayon pool, each worker
//! thread owning one tagger, and the per-document tables are merged with
//! the count monoid.

use crate::config::CorpusConfig;
use crate::corpus_source::CorpusSource;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use onsei_core::{Analyzer, Monoid, PhoneticCounts, Tagger};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Runs the analyzer over every document of a corpus
pub struct CorpusDriver<'a> {
    source: CorpusSource,
    corpus: &'a CorpusConfig,
    analyzer: &'a Analyzer,
}

impl<'a> CorpusDriver<'a> {
    /// Create a driver for `source`
    pub fn new(source: CorpusSource, corpus: &'a CorpusConfig, analyzer: &'a Analyzer) -> Self {
        Self {
            source,
            corpus,
            analyzer,
        }
    }

    /// Analyse one document with `tagger`
    pub fn analyze_document<T: Tagger>(&self, tagger: &mut T, path: &Path) -> Result<PhoneticCounts> {
        let text = self.source.load(path, self.corpus)?;
        log::debug!("Analysing {} ({} bytes)", path.display(), text.len());

        self.analyzer
            .analyze_document(tagger, &text)
            .with_context(|| format!("Failed to analyse: {}", path.display()))
    }

    /// Analyse `paths` in parallel and merge their tables
    ///
    /// `new_tagger` is called once per worker thread. The first failing
    /// document aborts the run.
    pub fn run<T, F>(
        &self,
        paths: &[PathBuf],
        new_tagger: F,
        progress: &ProgressReporter,
    ) -> Result<PhoneticCounts>
    where
        T: Tagger,
        F: Fn() -> T + Sync + Send,
    {
        paths
            .par_iter()
            .map_init(new_tagger, |tagger, path| {
                let counts = self.analyze_document(tagger, path)?;
                progress.document_completed(path);
                Ok(counts)
            })
            .try_reduce(PhoneticCounts::identity, |left, right| {
                Ok(left.combine(&right))
            })
    }
}
