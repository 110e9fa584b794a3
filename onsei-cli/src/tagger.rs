//! Morphological tagging with vibrato
//!
//! Wraps a vibrato [`Worker`] as an [`onsei_core::Tagger`] and decodes the
//! IPADIC feature string of each token into a structured [`Token`].

use crate::error::CliError;
use anyhow::{Context, Result};
use onsei_core::{PartOfSpeech, Tagger, Token};
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use vibrato::tokenizer::worker::Worker;
use vibrato::{Dictionary, Tokenizer};

/// Load a system dictionary, decompressing it when the file ends in `.zst`
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;
    let reader = BufReader::new(file);

    let is_zstd = path.extension().is_some_and(|ext| ext == "zst");
    let dict = if is_zstd {
        let decoder = zstd::stream::read::Decoder::new(reader)
            .with_context(|| format!("Failed to decompress dictionary: {}", path.display()))?;
        read_dictionary(decoder, path)?
    } else {
        read_dictionary(reader, path)?
    };

    log::info!("Loaded dictionary {}", path.display());
    Ok(dict)
}

fn read_dictionary<R: Read>(reader: R, path: &Path) -> Result<Dictionary> {
    Dictionary::read(reader)
        .map_err(|e| CliError::DictionaryError(format!("{}: {e}", path.display())).into())
}

/// Build a tokenizer over `dict`
pub fn tokenizer(dict: Dictionary) -> Tokenizer {
    Tokenizer::new(dict)
}

/// Tagger backed by one vibrato worker
pub struct VibratoTagger<'t> {
    worker: Worker<'t>,
}

impl<'t> VibratoTagger<'t> {
    /// Create a tagger with its own worker
    pub fn new(tokenizer: &'t Tokenizer) -> Self {
        Self {
            worker: tokenizer.new_worker(),
        }
    }
}

impl Tagger for VibratoTagger<'_> {
    type Error = Infallible;

    /// Tag `text` one line at a time
    fn tag(&mut self, text: &str) -> Result<Vec<Token>, Infallible> {
        let mut tokens = Vec::new();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            self.worker.reset_sentence(line);
            self.worker.tokenize();
            tokens.extend(
                self.worker
                    .token_iter()
                    .filter_map(|token| parse_feature(token.feature())),
            );
        }

        Ok(tokens)
    }
}

/// Decode an IPADIC feature string
///
/// Fields are `pos,sub1,sub2,sub3,conj_type,conj_form,base,reading,pronunciation`;
/// `*` and missing fields are absent. Sentence boundary sentinels yield `None`.
pub fn parse_feature(feature: &str) -> Option<Token> {
    let mut fields = feature.split(',').map(|field| match field {
        "" | "*" => None,
        value => Some(value.to_string()),
    });

    let pos = fields.next().flatten()?;
    if pos == "BOS/EOS" {
        return None;
    }

    let mut token = Token::new(PartOfSpeech::from_ipadic(&pos));
    for slot in token.subcategories.iter_mut() {
        *slot = fields.next().flatten();
    }
    token.conjugation_type = fields.next().flatten();
    token.conjugation_form = fields.next().flatten();
    token.base_form = fields.next().flatten();
    token.reading = fields.next().flatten();
    token.pronunciation = fields.next().flatten();

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_feature() {
        let token = parse_feature("動詞,自立,*,*,五段・マ行,連用タ接続,飲む,ノン,ノン").unwrap();
        assert_eq!(token.pos, PartOfSpeech::Verb);
        assert_eq!(token.subcategories[0].as_deref(), Some("自立"));
        assert_eq!(token.subcategories[1], None);
        assert_eq!(token.conjugation_type.as_deref(), Some("五段・マ行"));
        assert_eq!(token.conjugation_form.as_deref(), Some("連用タ接続"));
        assert_eq!(token.base_form.as_deref(), Some("飲む"));
        assert_eq!(token.reading.as_deref(), Some("ノン"));
        assert_eq!(token.pronunciation.as_deref(), Some("ノン"));
    }

    #[test]
    fn test_parse_unknown_word_feature() {
        // Unknown words carry no reading or pronunciation
        let token = parse_feature("名詞,固有名詞,組織,*,*,*,*").unwrap();
        assert_eq!(token.pos, PartOfSpeech::Noun);
        assert_eq!(token.base_form, None);
        assert_eq!(token.reading, None);
        assert_eq!(token.pronunciation, None);
    }

    #[test]
    fn test_parse_symbol() {
        let token = parse_feature("記号,句点,*,*,*,*,。,。,。").unwrap();
        assert_eq!(token.pos, PartOfSpeech::Symbol);
        assert_eq!(token.reading.as_deref(), Some("。"));
    }

    #[test]
    fn test_parse_sentinels_and_empty() {
        assert!(parse_feature("BOS/EOS,*,*,*,*,*,*,*,*").is_none());
        assert!(parse_feature("").is_none());
        assert!(parse_feature("*").is_none());
    }

    #[test]
    fn test_unlisted_pos_is_preserved() {
        let token = parse_feature("その他,間投,*,*,*,*,あ,ア,ア").unwrap();
        assert_eq!(token.pos, PartOfSpeech::Other("その他".to_string()));
    }

    #[test]
    fn test_missing_dictionary() {
        let err = load_dictionary(Path::new("/nonexistent/system.dic.zst"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to open dictionary"));
    }

    #[test]
    fn test_corrupt_dictionary() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("system.dic");
        std::fs::write(&path, b"not a dictionary").unwrap();

        let err = load_dictionary(&path).err().unwrap();
        assert!(err.to_string().starts_with("Dictionary error"));
    }
}
