//! Query processing: derive filtered views from count tables.
//!
//! This module handles the third stage of the pipeline - turning raw tables
//! into the subsets the report presents. It provides:
//!
//! - **Options**: policy knobs with overridable defaults (`ReportOptions`)
//! - **Queries**: inclusive range filter and main-character threshold
//!   filter, both order-preserving (`range_query`, `main_characters`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use dramatislib::query::{main_characters, range_query, ReportOptions};
//!
//! let options = ReportOptions::new().threshold(20).range(5, 9);
//! let main = main_characters(&table, options.main_threshold);
//! ```

pub mod options;
pub mod queryset;

pub use options::{ReportOptions, DEFAULT_MAIN_THRESHOLD, DEFAULT_RANGE};
pub use queryset::{main_characters, range_query, NamedCount};
