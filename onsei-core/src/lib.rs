//! Phonetic frequency statistics for Japanese text
//!
//! This crate turns tagged Japanese text into counts of vowels, consonant
//! clusters and their co-occurrence patterns:
//!
//! 1. tokens from a morphological tagger are wrapped as [`Word`]s,
//! 2. the [`bunsetsu`] segmenter groups them into phrase units,
//! 3. the units' katakana readings are joined with spaces and [`kana::romanize`]d,
//! 4. the [`stats`] engine scans the code string into four count tables.
//!
//! The tagger itself is external; anything implementing [`Tagger`] can
//! drive an [`Analyzer`].
//!
//! # Example
//!
//! ```rust
//! use onsei_core::{AnalysisConfig, Analyzer, PartOfSpeech, PhoneticCounts, Token};
//!
//! let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
//! let tokens = vec![
//!     Token::new(PartOfSpeech::Noun).with_base_form("肩").with_reading("カタ"),
//! ];
//!
//! let mut counts = PhoneticCounts::new();
//! analyzer.analyze_tokens(tokens, &mut counts);
//!
//! assert_eq!(counts.vowels.get("a"), 2);
//! assert_eq!(counts.consonants.get("k"), 1);
//! assert_eq!(counts.vowel_pairs.get("aa"), 1);
//! ```

pub mod bunsetsu;
pub mod config;
pub mod error;
pub mod kana;
pub mod pipeline;
pub mod stats;
pub mod token;
pub mod word;

pub use bunsetsu::{PhraseUnit, Segmenter};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ScanMode};
pub use error::{Error, Result};
pub use kana::romanize;
pub use pipeline::Analyzer;
pub use stats::{CountTable, Monoid, MonoidReduce, PhoneticCounts};
pub use token::{PartOfSpeech, Tagger, Token};
pub use word::Word;
