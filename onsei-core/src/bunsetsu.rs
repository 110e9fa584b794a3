//! Bunsetsu segmentation
//!
//! Groups a stream of [`Word`]s into phrase units. Nouns always stand alone:
//! they close whatever is pending and are emitted as singleton units (or
//! dropped, see [`Segmenter::new`]). Any other phrase-starting word or a
//! symbol closes the pending unit; symbols themselves never enter a unit.
//!
//! ```rust
//! use onsei_core::bunsetsu::{join_readings, Segmenter};
//! use onsei_core::token::{PartOfSpeech, Token};
//! use onsei_core::word::Word;
//!
//! let words = vec![
//!     Word::new(Token::new(PartOfSpeech::Noun).with_base_form("猫").with_reading("ネコ")),
//!     Word::new(Token::new(PartOfSpeech::Particle).with_base_form("が").with_reading("ガ")),
//!     Word::new(Token::new(PartOfSpeech::Verb).with_base_form("鳴く").with_reading("ナク")),
//! ];
//!
//! let units: Vec<_> = Segmenter::new(words, false).collect();
//! assert_eq!(join_readings(&units), "ネコ ガ ナク");
//! ```

use crate::word::Word;
use std::iter::Fuse;

/// An ordered, non-empty run of words forming one phrase unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseUnit {
    words: Vec<Word>,
}

impl PhraseUnit {
    fn single(word: Word) -> Self {
        Self { words: vec![word] }
    }

    /// Member words in order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of member words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; units are never empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Concatenated reading of the members
    ///
    /// Words whose reading is unknown contribute nothing.
    pub fn reading(&self) -> String {
        self.words.iter().filter_map(Word::reading).collect()
    }

    /// Consume the unit, returning its words
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

/// Lazy bunsetsu segmenter over a word iterator
#[derive(Debug)]
pub struct Segmenter<I: Iterator<Item = Word>> {
    words: Fuse<I>,
    buffer: Vec<Word>,
    pending: Option<PhraseUnit>,
    include_katakana_nouns: bool,
}

impl<I: Iterator<Item = Word>> Segmenter<I> {
    /// Create a segmenter
    ///
    /// When `include_katakana_nouns` is false, a noun whose dictionary form
    /// ends in katakana (or ー) is dropped instead of becoming a unit. Nouns
    /// without a reading are always dropped.
    pub fn new<W>(words: W, include_katakana_nouns: bool) -> Self
    where
        W: IntoIterator<Item = Word, IntoIter = I>,
    {
        Self {
            words: words.into_iter().fuse(),
            buffer: Vec::new(),
            pending: None,
            include_katakana_nouns,
        }
    }

    fn flush(&mut self) -> PhraseUnit {
        PhraseUnit {
            words: std::mem::take(&mut self.buffer),
        }
    }

    fn keeps_noun(&self, noun: &Word) -> bool {
        noun.reading().is_some()
            && (self.include_katakana_nouns || !noun.has_katakana_base_form())
    }
}

impl<I: Iterator<Item = Word>> Iterator for Segmenter<I> {
    type Item = PhraseUnit;

    fn next(&mut self) -> Option<PhraseUnit> {
        if let Some(unit) = self.pending.take() {
            return Some(unit);
        }

        loop {
            let Some(word) = self.words.next() else {
                if self.buffer.is_empty() {
                    return None;
                }
                return Some(self.flush());
            };

            if word.is_noun() {
                let noun = self.keeps_noun(&word).then(|| PhraseUnit::single(word));
                if !self.buffer.is_empty() {
                    let flushed = self.flush();
                    self.pending = noun;
                    return Some(flushed);
                }
                match noun {
                    Some(unit) => return Some(unit),
                    None => continue,
                }
            }

            let closed = if (word.can_start_phrase_unit() || word.is_symbol())
                && !self.buffer.is_empty()
            {
                Some(self.flush())
            } else {
                None
            };

            if !word.is_symbol() {
                self.buffer.push(word);
            }

            if closed.is_some() {
                return closed;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.words.size_hint();
        let extra = usize::from(self.pending.is_some()) + usize::from(!self.buffer.is_empty());
        (0, upper.map(|n| n + extra))
    }
}

/// Segment `words` into phrase units
pub fn segment<W>(words: W, include_katakana_nouns: bool) -> Segmenter<W::IntoIter>
where
    W: IntoIterator<Item = Word>,
{
    Segmenter::new(words, include_katakana_nouns)
}

/// Join the readings of `units` with single spaces
pub fn join_readings(units: &[PhraseUnit]) -> String {
    units
        .iter()
        .map(PhraseUnit::reading)
        .collect::<Vec<_>>()
        .join(" ")
}
