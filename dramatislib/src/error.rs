//! Error types for dramatislib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while obtaining input text
#[derive(Error, Debug)]
pub enum SourceError {
    /// The input path could not be opened or read
    #[error("source unavailable '{path}': {source}")]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}
