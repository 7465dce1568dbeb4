//! Source acquisition: obtain the text to analyze.
//!
//! This module handles the first stage of the pipeline - turning a path into
//! the full text snapshot both analyses run over. It provides:
//!
//! - **SourceProvider**: the "readable text stream" seam the report builder
//!   depends on
//! - **FileSource**: the filesystem implementation used by the CLI
//! - **StaticSource**: an in-memory implementation for tests and doctests
//!
//! ## Example
//!
//! ```rust,ignore
//! use dramatislib::source::{FileSource, SourceProvider};
//!
//! let text = FileSource.fetch(Path::new("hamlet.txt"))?;
//! ```

pub mod provider;

pub use provider::{FileSource, SourceProvider, StaticSource};
