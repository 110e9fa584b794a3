//! Token-to-statistics pipeline
//!
//! tokens → words → bunsetsu → readings joined by spaces → romanized code →
//! count tables.

use crate::bunsetsu::segment;
use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::kana::romanize;
use crate::stats::{scanner_for, PhoneticCounts, PhoneticScanner};
use crate::token::{Tagger, Token};
use crate::word::Word;
use std::fmt;

/// Runs the phonetic pipeline over documents
pub struct Analyzer {
    config: AnalysisConfig,
    scanner: Box<dyn PhoneticScanner>,
}

impl Analyzer {
    /// Create an analyzer, compiling patterns if the scan mode needs them
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let scanner = scanner_for(config.scan_mode())?;
        Ok(Self { config, scanner })
    }

    /// The configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Segment `tokens` and join the phrase-unit readings with single spaces
    pub fn reading<I>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = Token>,
    {
        let words = tokens.into_iter().map(Word::new);
        let mut reading = String::new();

        for (i, unit) in segment(words, self.config.include_katakana_nouns()).enumerate() {
            if i > 0 {
                reading.push(' ');
            }
            reading.push_str(&unit.reading());
        }

        reading
    }

    /// Romanized code string of `tokens`
    pub fn code_string<I>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = Token>,
    {
        romanize(&self.reading(tokens))
    }

    /// Add the counts of an already romanized code string
    pub fn analyze_code(&self, code: &str, counts: &mut PhoneticCounts) {
        self.scanner.scan(code, counts);
    }

    /// Add the counts of a token sequence
    pub fn analyze_tokens<I>(&self, tokens: I, counts: &mut PhoneticCounts)
    where
        I: IntoIterator<Item = Token>,
    {
        let code = self.code_string(tokens);
        self.analyze_code(&code, counts);
    }

    /// Tag `text` and add its counts
    pub fn analyze_text<T: Tagger>(
        &self,
        tagger: &mut T,
        text: &str,
        counts: &mut PhoneticCounts,
    ) -> Result<()> {
        let tokens = tagger
            .tag(text)
            .map_err(|e| Error::Tagger(Box::new(e)))?;
        log::trace!("Tagged {} tokens from {} bytes", tokens.len(), text.len());

        let code = self.code_string(tokens);
        log::trace!("Code string of {} bytes", code.len());

        self.analyze_code(&code, counts);
        Ok(())
    }

    /// Counts of a single document
    pub fn analyze_document<T: Tagger>(&self, tagger: &mut T, text: &str) -> Result<PhoneticCounts> {
        let mut counts = PhoneticCounts::new();
        self.analyze_text(tagger, text, &mut counts)?;
        Ok(counts)
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("scan_mode", &self.scanner.mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::PartOfSpeech;
    use std::convert::Infallible;

    struct FixedTagger(Vec<Token>);

    impl Tagger for FixedTagger {
        type Error = Infallible;

        fn tag(&mut self, _text: &str) -> std::result::Result<Vec<Token>, Infallible> {
            Ok(self.0.clone())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("dictionary not loaded")
        }
    }

    impl std::error::Error for Broken {}

    struct BrokenTagger;

    impl Tagger for BrokenTagger {
        type Error = Broken;

        fn tag(&mut self, _text: &str) -> std::result::Result<Vec<Token>, Broken> {
            Err(Broken)
        }
    }

    fn t(pos: PartOfSpeech, base: &str, reading: &str) -> Token {
        Token::new(pos).with_base_form(base).with_reading(reading)
    }

    fn sentence() -> Vec<Token> {
        // 学校でコーヒーを飲んだ。
        vec![
            t(PartOfSpeech::Noun, "学校", "ガッコウ"),
            t(PartOfSpeech::Particle, "で", "デ"),
            t(PartOfSpeech::Noun, "コーヒー", "コーヒー"),
            t(PartOfSpeech::Particle, "を", "ヲ"),
            t(PartOfSpeech::Verb, "飲む", "ノン"),
            t(PartOfSpeech::AuxiliaryVerb, "だ", "ダ"),
            t(PartOfSpeech::Symbol, "。", "。"),
        ]
    }

    #[test]
    fn test_code_string_without_katakana_nouns() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        assert_eq!(analyzer.reading(sentence()), "ガッコウ デ ヲ ノンダ");
        assert_eq!(analyzer.code_string(sentence()), "gaLkou de wo noNda");
    }

    #[test]
    fn test_code_string_with_katakana_nouns() {
        let config = AnalysisConfig::builder()
            .include_katakana_nouns(true)
            .build()
            .unwrap();
        let analyzer = Analyzer::new(config).unwrap();
        assert_eq!(
            analyzer.code_string(sentence()),
            "gaLkou de ko-hi- wo noNda"
        );
    }

    #[test]
    fn test_analyze_text_counts() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        let mut tagger = FixedTagger(sentence());
        let counts = analyzer.analyze_document(&mut tagger, "学校でコーヒーを飲んだ。").unwrap();

        // gaLkou de wo noNda
        assert_eq!(counts.vowels.get("o"), 3);
        assert_eq!(counts.vowels.get("L"), 1);
        assert_eq!(counts.vowels.get("N"), 1);
        assert_eq!(counts.consonants.get("g"), 1);
        assert_eq!(counts.consonants.get("w"), 1);
        assert_eq!(counts.vowel_pairs.get("aL"), 1);
        assert_eq!(counts.vowel_pairs.get("ou"), 1);
        assert_eq!(counts.consonant_combinations.get("aLko"), 1);
        assert_eq!(counts.consonant_combinations.get("oNda"), 0);
    }

    #[test]
    fn test_tagger_failure_is_reported() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        let result = analyzer.analyze_document(&mut BrokenTagger, "text");
        match result {
            Err(Error::Tagger(source)) => assert_eq!(source.to_string(), "dictionary not loaded"),
            other => panic!("expected tagger error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_document() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        let counts = analyzer
            .analyze_document(&mut FixedTagger(Vec::new()), "")
            .unwrap();
        assert_eq!(counts, PhoneticCounts::new());
    }
}
