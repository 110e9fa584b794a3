//! Word view over a tagged token

use crate::kana;
use crate::token::{PartOfSpeech, Token};

/// A read-only projection of a [`Token`] with the predicates the segmenter needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    token: Token,
}

impl Word {
    /// Wrap a token
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    /// The underlying token
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Part of speech
    pub fn pos(&self) -> &PartOfSpeech {
        &self.token.pos
    }

    /// Dictionary form, if the tagger knows it
    pub fn base_form(&self) -> Option<&str> {
        self.token.base_form.as_deref()
    }

    /// Katakana reading, if the tagger knows it
    pub fn reading(&self) -> Option<&str> {
        self.token.reading.as_deref()
    }

    /// Whether the word is a noun
    #[inline]
    pub fn is_noun(&self) -> bool {
        self.token.pos == PartOfSpeech::Noun
    }

    /// Whether the word is a symbol
    #[inline]
    pub fn is_symbol(&self) -> bool {
        self.token.pos == PartOfSpeech::Symbol
    }

    /// Whether this word opens a new bunsetsu
    #[inline]
    pub fn can_start_phrase_unit(&self) -> bool {
        matches!(
            self.token.pos,
            PartOfSpeech::Noun
                | PartOfSpeech::Verb
                | PartOfSpeech::Prefix
                | PartOfSpeech::Adverb
                | PartOfSpeech::Interjection
                | PartOfSpeech::Adjective
                | PartOfSpeech::AdjectivalNoun
                | PartOfSpeech::Adnominal
        )
    }

    /// Whether the dictionary form ends in katakana or ー
    ///
    /// Words without a base form never count as katakana words.
    pub fn has_katakana_base_form(&self) -> bool {
        self.base_form().is_some_and(kana::ends_with_katakana)
    }
}

impl From<Token> for Word {
    fn from(token: Token) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(pos: PartOfSpeech) -> Word {
        Word::new(Token::new(pos))
    }

    #[test]
    fn test_noun_and_symbol_predicates() {
        assert!(word(PartOfSpeech::Noun).is_noun());
        assert!(!word(PartOfSpeech::Noun).is_symbol());
        assert!(word(PartOfSpeech::Symbol).is_symbol());
        assert!(!word(PartOfSpeech::Particle).is_noun());
    }

    #[test]
    fn test_phrase_starters() {
        for pos in [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Prefix,
            PartOfSpeech::Adverb,
            PartOfSpeech::Interjection,
            PartOfSpeech::Adjective,
            PartOfSpeech::AdjectivalNoun,
            PartOfSpeech::Adnominal,
        ] {
            assert!(word(pos.clone()).can_start_phrase_unit(), "{pos:?}");
        }

        for pos in [
            PartOfSpeech::Particle,
            PartOfSpeech::AuxiliaryVerb,
            PartOfSpeech::Conjunction,
            PartOfSpeech::Symbol,
            PartOfSpeech::Filler,
            PartOfSpeech::Other("その他".to_string()),
        ] {
            assert!(!word(pos.clone()).can_start_phrase_unit(), "{pos:?}");
        }
    }

    #[test]
    fn test_katakana_base_form() {
        let loanword = Word::new(Token::new(PartOfSpeech::Noun).with_base_form("コーヒー"));
        assert!(loanword.has_katakana_base_form());

        let native = Word::new(Token::new(PartOfSpeech::Noun).with_base_form("珈琲"));
        assert!(!native.has_katakana_base_form());

        let unknown = word(PartOfSpeech::Noun);
        assert!(!unknown.has_katakana_base_form());
    }

    #[test]
    fn test_field_projection() {
        let w = Word::from(
            Token::new(PartOfSpeech::Verb)
                .with_base_form("走る")
                .with_reading("ハシッ"),
        );
        assert_eq!(w.base_form(), Some("走る"));
        assert_eq!(w.reading(), Some("ハシッ"));
        assert_eq!(w.pos(), &PartOfSpeech::Verb);
    }
}
