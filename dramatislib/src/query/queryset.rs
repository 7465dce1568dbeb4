//! Derived views over a count table.
//!
//! Queries never mutate the table and never fail: an empty result is an
//! ordinary value the renderer turns into a placeholder line.

use serde::{Deserialize, Serialize};

use crate::data::CountTable;

/// One name with its count, as selected by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    /// The table key
    pub name: String,
    /// Its accumulated count
    pub count: u64,
}

/// Entries whose count falls within `low..=high`, in table order.
pub fn range_query(table: &CountTable, low: u64, high: u64) -> Vec<NamedCount> {
    table
        .iter()
        .filter(|&(_, count)| count >= low && count <= high)
        .map(|(name, count)| NamedCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Entries whose count meets `threshold`, in table order.
pub fn main_characters(table: &CountTable, threshold: u64) -> Vec<NamedCount> {
    table
        .iter()
        .filter(|&(_, count)| count >= threshold)
        .map(|(name, count)| NamedCount {
            name: name.to_string(),
            count,
        })
        .collect()
}
