//! # dramatislib
//!
//! Word-frequency and speaking-character analysis for script-like text.
//!
//! ## Overview
//!
//! Given one text file, this library runs two independent linear scans and
//! composes them into a single report:
//!
//! - **Words**: whitespace-delimited tokens, lowercased, attached
//!   punctuation kept, counted in first-seen order with a first-wins
//!   tie-break on the maximum
//! - **Characters**: lines opening with an ALL-CAPS label before a period
//!   ("HAMLET. To be...") counted as speaking parts, with a configurable
//!   main-character threshold and an inclusive range query
//!
//! The pipeline is total: an unreadable source degrades to a report with
//! explicit "no data" placeholders instead of an error.
//!
//! ## Pipeline
//!
//! The crate is laid out by stage:
//!
//! 1. `source` - obtain the text snapshot (`SourceProvider`, `FileSource`)
//! 2. `data` - accumulate counts (`CountTable`, `count_words`,
//!    `count_characters`)
//! 3. `query` - derive filtered views (`range_query`, `main_characters`,
//!    `ReportOptions`)
//! 4. `output` - compose and render (`Report`, `Report::to_text`)
//!
//! ## Example
//!
//! ```rust
//! use dramatislib::{analyze_file, ReportOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("scene.txt");
//! fs::write(&path, "HAMLET. Words, words, words.\nHAMLET. To be").unwrap();
//!
//! let report = analyze_file(&path, ReportOptions::new().threshold(2));
//!
//! assert_eq!(report.words.max.as_ref().unwrap().key, "hamlet.");
//! assert_eq!(report.characters.main[0].name, "HAMLET");
//! println!("{}", report.to_text());
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{count_characters, count_words, speaker_label, CountTable, Entry};
pub use error::SourceError;
pub use output::{analyze_file, CharacterSection, Report, WordSection};
pub use query::{main_characters, range_query, NamedCount, ReportOptions};
pub use source::{FileSource, SourceProvider, StaticSource};

/// Result type for dramatislib operations
pub type Result<T> = std::result::Result<T, SourceError>;
