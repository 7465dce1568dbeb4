//! Data collection: scan text and accumulate counts.
//!
//! This module handles the second stage of the pipeline - running the two
//! linear scans over the input snapshot. It provides:
//!
//! - **CountTable**: insertion-ordered key -> count mapping (`Entry`)
//! - **Word counting**: whitespace tokenization, case-insensitive
//!   (`count_words`)
//! - **Character counting**: per-line ALL-CAPS speaker labels
//!   (`count_characters`, `speaker_label`)
//!
//! The two counters are independent; nothing here reads files or formats
//! output.
//!
//! ## Example
//!
//! ```rust
//! use dramatislib::data::{count_characters, count_words};
//!
//! let text = "HAMLET. Words, words, words.";
//! assert_eq!(count_words(text).get("words,"), Some(2));
//! assert_eq!(count_characters(text).get("HAMLET"), Some(1));
//! ```

pub mod characters;
pub mod table;
pub mod words;

pub use characters::{count_characters, speaker_label};
pub use table::{CountTable, Entry};
pub use words::count_words;
