//! Phonetic statistics engine
//!
//! Scans a romanized code string and accumulates four count tables:
//!
//! - vowel and mora-marker occurrences,
//! - consonant cluster occurrences,
//! - vowel pairs separated only by consonant material,
//! - onset-conditioned two-mora consonant combinations.
//!
//! Tables are accumulated in place so one [`PhoneticCounts`] can absorb a whole
//! corpus, or each worker can fill its own and the results can be merged with
//! [`Monoid::combine`].

pub mod alphabet;
pub mod count_table;
pub mod monoid;
pub mod pattern;
pub mod scan;

pub use count_table::CountTable;
pub use monoid::{Monoid, MonoidReduce};
pub use pattern::PatternFamilies;

use crate::config::ScanMode;
use alphabet::{combination_key, combination_keys, vowel_pair_keys, CONSONANTS, NUCLEI};
use serde::Serialize;

/// The four count tables of one analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneticCounts {
    /// Vowel and mora-marker counts
    pub vowels: CountTable,
    /// Consonant cluster counts
    pub consonants: CountTable,
    /// Vowel-pair counts
    pub vowel_pairs: CountTable,
    /// Consonant combination counts
    pub consonant_combinations: CountTable,
}

impl PhoneticCounts {
    /// Create tables with every key registered at zero, in enumeration order
    pub fn new() -> Self {
        Self {
            vowels: CountTable::with_keys(NUCLEI),
            consonants: CountTable::with_keys(CONSONANTS),
            vowel_pairs: CountTable::with_keys(vowel_pair_keys()),
            consonant_combinations: CountTable::with_keys(combination_keys()),
        }
    }

    /// Add every table of `other` into this one
    pub fn merge(&mut self, other: &PhoneticCounts) {
        self.vowels.merge(&other.vowels);
        self.consonants.merge(&other.consonants);
        self.vowel_pairs.merge(&other.vowel_pairs);
        self.consonant_combinations.merge(&other.consonant_combinations);
    }
}

impl Default for PhoneticCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl Monoid for CountTable {
    fn identity() -> Self {
        CountTable::new()
    }

    fn combine(&self, other: &Self) -> Self {
        let mut combined = self.clone();
        combined.merge(other);
        combined
    }
}

impl MonoidReduce for CountTable {}

impl Monoid for PhoneticCounts {
    fn identity() -> Self {
        PhoneticCounts::new()
    }

    fn combine(&self, other: &Self) -> Self {
        let mut combined = self.clone();
        combined.merge(other);
        combined
    }
}

impl MonoidReduce for PhoneticCounts {}

/// Strategy for counting pattern occurrences in a code string
pub trait PhoneticScanner: Send + Sync {
    /// Add the counts of `code` into `counts`
    fn scan(&self, code: &str, counts: &mut PhoneticCounts);

    /// The mode this scanner implements
    fn mode(&self) -> ScanMode;
}

/// Single-pass byte scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanner;

impl PhoneticScanner for LinearScanner {
    fn scan(&self, code: &str, counts: &mut PhoneticCounts) {
        for key in NUCLEI {
            counts.vowels.add(key, scan::count_occurrences(code, key));
        }

        for key in CONSONANTS {
            counts.consonants.add(key, scan::count_occurrences(code, key));
        }

        let bytes = code.as_bytes();
        for first in NUCLEI {
            for second in NUCLEI {
                let n = scan::count_vowel_pair(bytes, first.as_bytes()[0], second.as_bytes()[0]);
                counts.vowel_pairs.add(format!("{first}{second}"), n);
            }
        }

        for (index, n) in scan::count_consonant_combinations(bytes)
            .into_iter()
            .enumerate()
        {
            if n > 0 {
                counts.consonant_combinations.add(combination_key(index), n);
            }
        }
    }

    fn mode(&self) -> ScanMode {
        ScanMode::Linear
    }
}

/// Scanner running one compiled pattern per key
#[derive(Debug, Clone)]
pub struct PatternScanner {
    families: PatternFamilies,
}

impl PatternScanner {
    /// Compile every pattern family
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            families: PatternFamilies::compile()?,
        })
    }
}

impl PhoneticScanner for PatternScanner {
    fn scan(&self, code: &str, counts: &mut PhoneticCounts) {
        let families = &self.families;
        let tables = [
            (&families.vowels, &mut counts.vowels),
            (&families.consonants, &mut counts.consonants),
            (&families.vowel_pairs, &mut counts.vowel_pairs),
            (
                &families.consonant_combinations,
                &mut counts.consonant_combinations,
            ),
        ];

        for (patterns, table) in tables {
            for pattern in patterns {
                table.add(pattern.key.as_str(), pattern.count(code));
            }
        }
    }

    fn mode(&self) -> ScanMode {
        ScanMode::Regex
    }
}

/// Build the scanner for `mode`
pub fn scanner_for(mode: ScanMode) -> Result<Box<dyn PhoneticScanner>, regex::Error> {
    Ok(match mode {
        ScanMode::Linear => Box::new(LinearScanner),
        ScanMode::Regex => Box::new(PatternScanner::new()?),
    })
}
