//! Insertion-ordered count table.
//!
//! Both analyses accumulate into a `CountTable`: a mapping from a normalized
//! key to how many times it was seen, iterating in first-seen order. The
//! order matters - ties on the maximum resolve to the earliest key, and the
//! report dumps entries in the order they first appeared in the source.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One key with its accumulated count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Normalized key (lowercased word, or uppercase character name)
    pub key: String,
    /// Number of occurrences, always >= 1
    pub count: u64,
}

/// An ordered mapping from key to occurrence count.
///
/// Entries keep their insertion order; a key is never removed once recorded.
/// Lookup goes through a key -> slot index so recording stays O(1) per token
/// instead of a linear scan of the key list.
#[derive(Debug, Clone, Default)]
pub struct CountTable {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl CountTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`, inserting it with count 1 when new.
    pub fn record(&mut self, key: impl Into<String>) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Entry { key, count: 1 });
            }
        }
    }

    /// Look up the count for `key`.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (equals the number of recorded occurrences).
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|e| (e.key.as_str(), e.count))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The first entry holding the maximum count, or `None` on an empty
    /// table. Later entries only win with a strictly greater count, so ties
    /// resolve to the earliest insertion.
    pub fn max_entry(&self) -> Option<&Entry> {
        let mut best: Option<&Entry> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.count <= current.count => {}
                _ => best = Some(entry),
            }
        }
        best
    }
}

impl PartialEq for CountTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for CountTable {}
