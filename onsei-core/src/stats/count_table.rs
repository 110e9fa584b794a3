//! Count tables with zero defaults and stable key order

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Mapping from pattern key to a non-negative count
///
/// Missing keys read as zero. Keys remember the order in which they were
/// first seen, which [`CountTable::sorted_by_count`] uses to break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl CountTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with `keys` registered at zero, in order
    pub fn with_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut table = Self::new();
        for key in keys {
            table.add(key, 0);
        }
        table
    }

    /// Count for `key`, zero if absent
    pub fn get(&self, key: &str) -> u64 {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Add `amount` to `key`, inserting it if absent
    pub fn add(&mut self, key: impl Into<String>, amount: u64) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, amount));
            }
        }
    }

    /// Add one to `key`
    pub fn increment(&mut self, key: impl Into<String>) {
        self.add(key, 1);
    }

    /// Whether `key` has been registered
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Add every count of `other` into this table
    pub fn merge(&mut self, other: &CountTable) {
        for (key, count) in other.iter() {
            match self.index.get(key) {
                Some(&slot) => self.entries[slot].1 += count,
                None => self.add(key, count),
            }
        }
    }

    /// Entries sorted by count descending; ties keep first-seen order
    pub fn sorted_by_count(&self) -> Vec<(String, u64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl Serialize for CountTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for CountTable {
    fn from_iter<T: IntoIterator<Item = (K, u64)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (key, count) in iter {
            table.add(key, count);
        }
        table
    }
}
