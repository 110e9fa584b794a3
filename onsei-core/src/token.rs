//! Morphological tokens produced by an external tagger
//!
//! A [`Token`] is a structured record filled in directly by a tagger adapter.
//! The core never parses delimited feature strings; adapters such as the
//! vibrato bridge in `onsei-cli` do that once at the boundary.

use std::fmt;

/// Part-of-speech category of a token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// 名詞
    Noun,
    /// 動詞
    Verb,
    /// 形容詞
    Adjective,
    /// 形容動詞
    AdjectivalNoun,
    /// 副詞
    Adverb,
    /// 連体詞
    Adnominal,
    /// 接頭詞
    Prefix,
    /// 感動詞
    Interjection,
    /// 接続詞
    Conjunction,
    /// 助詞
    Particle,
    /// 助動詞
    AuxiliaryVerb,
    /// 記号
    Symbol,
    /// フィラー
    Filler,
    /// Any label the tagger produces that has no dedicated variant
    Other(String),
}

impl PartOfSpeech {
    /// Map an IPADIC top-level part-of-speech label
    pub fn from_ipadic(label: &str) -> Self {
        match label {
            "名詞" => PartOfSpeech::Noun,
            "動詞" => PartOfSpeech::Verb,
            "形容詞" => PartOfSpeech::Adjective,
            "形容動詞" => PartOfSpeech::AdjectivalNoun,
            "副詞" => PartOfSpeech::Adverb,
            "連体詞" => PartOfSpeech::Adnominal,
            "接頭詞" => PartOfSpeech::Prefix,
            "感動詞" => PartOfSpeech::Interjection,
            "接続詞" => PartOfSpeech::Conjunction,
            "助詞" => PartOfSpeech::Particle,
            "助動詞" => PartOfSpeech::AuxiliaryVerb,
            "記号" => PartOfSpeech::Symbol,
            "フィラー" => PartOfSpeech::Filler,
            other => PartOfSpeech::Other(other.to_string()),
        }
    }

    /// The IPADIC label for this category
    pub fn as_ipadic(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "名詞",
            PartOfSpeech::Verb => "動詞",
            PartOfSpeech::Adjective => "形容詞",
            PartOfSpeech::AdjectivalNoun => "形容動詞",
            PartOfSpeech::Adverb => "副詞",
            PartOfSpeech::Adnominal => "連体詞",
            PartOfSpeech::Prefix => "接頭詞",
            PartOfSpeech::Interjection => "感動詞",
            PartOfSpeech::Conjunction => "接続詞",
            PartOfSpeech::Particle => "助詞",
            PartOfSpeech::AuxiliaryVerb => "助動詞",
            PartOfSpeech::Symbol => "記号",
            PartOfSpeech::Filler => "フィラー",
            PartOfSpeech::Other(label) => label,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ipadic())
    }
}

/// One morphological unit with its part of speech and reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Top-level part of speech
    pub pos: PartOfSpeech,
    /// Up to three sub-category refinements
    pub subcategories: [Option<String>; 3],
    /// Conjugation type (活用型)
    pub conjugation_type: Option<String>,
    /// Conjugation form (活用形)
    pub conjugation_form: Option<String>,
    /// Dictionary form (原形)
    pub base_form: Option<String>,
    /// Phonetic reading in katakana (読み)
    pub reading: Option<String>,
    /// Pronunciation variant (発音)
    pub pronunciation: Option<String>,
}

impl Token {
    /// Create a token with only a part of speech; every other field is absent
    pub fn new(pos: PartOfSpeech) -> Self {
        Self {
            pos,
            subcategories: [None, None, None],
            conjugation_type: None,
            conjugation_form: None,
            base_form: None,
            reading: None,
            pronunciation: None,
        }
    }

    /// Set the dictionary form
    pub fn with_base_form(mut self, base_form: impl Into<String>) -> Self {
        self.base_form = Some(base_form.into());
        self
    }

    /// Set the reading
    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = Some(reading.into());
        self
    }

    /// Set the pronunciation
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }
}

/// A morphological analyzer that turns raw text into tokens
///
/// Implementations must not yield sentence sentinels (BOS/EOS); the
/// segmenter expects only real morphemes.
pub trait Tagger {
    /// Error raised when tagging fails
    type Error: std::error::Error + Send + Sync + 'static;

    /// Tag `text`, returning its tokens in order
    fn tag(&mut self, text: &str) -> Result<Vec<Token>, Self::Error>;
}
