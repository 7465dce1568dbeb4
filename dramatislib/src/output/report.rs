//! Report building.
//!
//! `Report::build` is the high-level entry point: it reads the source once,
//! runs both counters over the same snapshot, applies the queries, and
//! captures everything the renderer needs. The build is total - an
//! unreadable source produces a report with empty sections and
//! `source_available` unset, never an error.

use std::path::Path;

use serde::Serialize;

use crate::data::{count_characters, count_words, Entry};
use crate::query::{main_characters, range_query, NamedCount, ReportOptions};
use crate::source::{FileSource, SourceProvider};

/// Word-frequency half of a report.
#[derive(Debug, Clone, Serialize)]
pub struct WordSection {
    /// Number of distinct lowercased tokens
    pub unique: usize,
    /// Full table dump in first-seen order
    pub entries: Vec<Entry>,
    /// First entry holding the maximum count, `None` when the table is empty
    pub max: Option<Entry>,
}

/// Speaking-character half of a report.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSection {
    /// Number of distinct speaker names
    pub unique: usize,
    /// Threshold the main-character list was built with
    pub threshold: u64,
    /// Names with count >= threshold, in first-seen order
    pub main: Vec<NamedCount>,
    /// Lower bound of the range query (inclusive)
    pub range_low: u64,
    /// Upper bound of the range query (inclusive)
    pub range_high: u64,
    /// Names whose count falls within the range, in first-seen order
    pub in_range: Vec<NamedCount>,
}

/// Combined result of one analysis run.
///
/// Immutable after construction; rebuilt from scratch on every run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The path the source provider was asked for
    pub path: String,
    /// False when the source could not be read; the sections are then empty
    pub source_available: bool,
    /// Word-frequency analysis
    pub words: WordSection,
    /// Speaking-character analysis
    pub characters: CharacterSection,
}

impl Report {
    /// Build a report for `path` using the given source provider.
    ///
    /// The source is fetched once and both analyses see the identical
    /// snapshot. A fetch failure degrades to empty sections.
    pub fn build(path: &Path, provider: &dyn SourceProvider, options: &ReportOptions) -> Report {
        let (text, source_available) = match provider.fetch(path) {
            Ok(text) => (text, true),
            Err(_) => (String::new(), false),
        };

        let word_table = count_words(&text);
        let character_table = count_characters(&text);

        let words = WordSection {
            unique: word_table.len(),
            max: word_table.max_entry().cloned(),
            entries: word_table.entries().to_vec(),
        };

        let characters = CharacterSection {
            unique: character_table.len(),
            threshold: options.main_threshold,
            main: main_characters(&character_table, options.main_threshold),
            range_low: options.range_low,
            range_high: options.range_high,
            in_range: range_query(&character_table, options.range_low, options.range_high),
        };

        Report {
            path: path.display().to_string(),
            source_available,
            words,
            characters,
        }
    }
}

/// Analyze a file on disk. Convenience wrapper around [`Report::build`]
/// with a [`FileSource`].
pub fn analyze_file(path: impl AsRef<Path>, options: ReportOptions) -> Report {
    Report::build(path.as_ref(), &FileSource, &options)
}
