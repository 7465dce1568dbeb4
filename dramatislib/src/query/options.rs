//! Policy options for report queries.
//!
//! The thresholds here are policy knobs, not detected statistics: callers
//! (and tests) override them through the builder or CLI flags.

use serde::{Deserialize, Serialize};

/// Default main-character threshold.
pub const DEFAULT_MAIN_THRESHOLD: u64 = 10;

/// Default inclusive bounds for the range query.
pub const DEFAULT_RANGE: (u64, u64) = (10, 15);

/// Tunables for building a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Minimum count for a name to qualify as a main character
    pub main_threshold: u64,
    /// Lower bound of the range query (inclusive)
    pub range_low: u64,
    /// Upper bound of the range query (inclusive)
    pub range_high: u64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            main_threshold: DEFAULT_MAIN_THRESHOLD,
            range_low: DEFAULT_RANGE.0,
            range_high: DEFAULT_RANGE.1,
        }
    }
}

impl ReportOptions {
    /// Create options with the defaults (threshold 10, range 10..=15).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the main-character threshold.
    pub fn threshold(mut self, threshold: u64) -> Self {
        self.main_threshold = threshold;
        self
    }

    /// Builder: set the inclusive range-query bounds.
    pub fn range(mut self, low: u64, high: u64) -> Self {
        self.range_low = low;
        self.range_high = high;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReportOptions::default();
        assert_eq!(options.main_threshold, 10);
        assert_eq!(options.range_low, 10);
        assert_eq!(options.range_high, 15);
    }

    #[test]
    fn test_builder_overrides() {
        let options = ReportOptions::new().threshold(3).range(1, 5);
        assert_eq!(options.main_threshold, 3);
        assert_eq!(options.range_low, 1);
        assert_eq!(options.range_high, 5);
    }
}
