//! Literal regular-expression pattern families
//!
//! Every key of every table gets its own compiled pattern, counted with
//! non-overlapping leftmost matching. This is the reference behaviour the
//! linear scans in [`super::scan`] reproduce; it is much slower, mostly
//! because of the 2025 consonant-combination patterns.

use super::alphabet::{
    combination_keys, vowel_pair_keys, COMBINATION_KEY_COUNT, CONSONANTS, NUCLEI,
    VOWEL_PAIR_KEY_COUNT,
};
use regex::Regex;

/// A compiled pattern and the key it counts into
#[derive(Debug, Clone)]
pub struct KeyedPattern {
    /// Table key
    pub key: String,
    /// Pattern counting occurrences of the key
    pub regex: Regex,
}

impl KeyedPattern {
    fn new(key: String, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            key,
            regex: Regex::new(pattern)?,
        })
    }

    /// Non-overlapping matches in `code`
    #[inline]
    pub fn count(&self, code: &str) -> u64 {
        self.regex.find_iter(code).count() as u64
    }
}

/// All four pattern families, compiled
#[derive(Debug, Clone)]
pub struct PatternFamilies {
    /// One pattern per vowel or mora marker
    pub vowels: Vec<KeyedPattern>,
    /// One pattern per consonant cluster symbol
    pub consonants: Vec<KeyedPattern>,
    /// `c1[^ aeiou]*c2` for every nucleus pair
    pub vowel_pairs: Vec<KeyedPattern>,
    /// `(onset)v1 marker cluster v2` for every combination
    pub consonant_combinations: Vec<KeyedPattern>,
}

impl PatternFamilies {
    /// Build and compile every pattern
    pub fn compile() -> Result<Self, regex::Error> {
        let literal = |key: &str| KeyedPattern::new(key.to_string(), &regex::escape(key));

        let vowels = NUCLEI.iter().map(|key| literal(key)).collect::<Result<_, _>>()?;
        let consonants = CONSONANTS
            .iter()
            .map(|key| literal(key))
            .collect::<Result<_, _>>()?;

        let vowel_pairs = vowel_pair_keys()
            .map(|key| {
                let (first, second) = key.split_at(1);
                let pattern = format!("{first}[^ aeiou]*{second}");
                KeyedPattern::new(key, &pattern)
            })
            .collect::<Result<_, _>>()?;

        let onset = format!("({})", CONSONANTS.join("|"));
        let consonant_combinations = combination_keys()
            .map(|key| {
                let pattern = format!("{onset}{key}");
                KeyedPattern::new(key, &pattern)
            })
            .collect::<Result<_, _>>()?;

        log::debug!(
            "Compiled pattern families ({} vowel, {} consonant, {} pair, {} combination patterns)",
            NUCLEI.len(),
            CONSONANTS.len(),
            VOWEL_PAIR_KEY_COUNT,
            COMBINATION_KEY_COUNT,
        );

        Ok(Self {
            vowels,
            consonants,
            vowel_pairs,
            consonant_combinations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_sizes() {
        let families = PatternFamilies::compile().unwrap();
        assert_eq!(families.vowels.len(), 7);
        assert_eq!(families.consonants.len(), 26);
        assert_eq!(families.vowel_pairs.len(), 49);
        assert_eq!(families.consonant_combinations.len(), 2025);
    }

    #[test]
    fn test_pair_pattern_shape() {
        let families = PatternFamilies::compile().unwrap();
        let pattern = &families.vowel_pairs[0];
        assert_eq!(pattern.key, "aa");
        assert_eq!(pattern.regex.as_str(), "a[^ aeiou]*a");
        assert_eq!(pattern.count("kata"), 1);
    }

    #[test]
    fn test_combination_pattern_counts() {
        let families = PatternFamilies::compile().unwrap();
        let ata = families
            .consonant_combinations
            .iter()
            .find(|p| p.key == "ata")
            .unwrap();
        assert_eq!(ata.count("kata"), 1);
        assert_eq!(ata.count("ata"), 0);
    }
}
