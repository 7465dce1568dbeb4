//! Output: build and render the combined report.
//!
//! This module handles the fourth and final stage of the pipeline -
//! composing both analyses into one immutable `Report` and formatting it.
//! It provides:
//!
//! - **Report**: the per-run result, with `WordSection` and
//!   `CharacterSection` halves (serde-serializable for structured output)
//! - **Text rendering**: `Report::to_text`, a fixed-layout text blob with
//!   explicit placeholder lines for every empty state
//!
//! ## Example
//!
//! ```rust,ignore
//! use dramatislib::output::{analyze_file, Report};
//!
//! let report = analyze_file("hamlet.txt", ReportOptions::default());
//! println!("{}", report.to_text());
//! ```

pub mod report;
pub mod text;

pub use report::{analyze_file, CharacterSection, Report, WordSection};
