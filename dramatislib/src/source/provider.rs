//! Source providers: the input seam of the pipeline.
//!
//! The report builder only needs "something that yields text for a path".
//! Keeping that behind a trait means the core never touches a file dialog,
//! a default-directory heuristic, or any other environment probing - the
//! caller decides where text comes from.

use std::path::Path;

use crate::error::SourceError;
use crate::Result;

/// A supplier of input text.
///
/// Implementations read the entire source up front; both counters then run
/// over the same snapshot.
pub trait SourceProvider {
    /// Fetch the full text for `path`.
    fn fetch(&self, path: &Path) -> Result<String>;
}

/// Reads sources from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl SourceProvider for FileSource {
    fn fetch(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Serves a fixed string regardless of path. Used by tests and doctests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub String);

impl StaticSource {
    /// Create a static source from any string-ish content.
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}

impl SourceProvider for StaticSource {
    fn fetch(&self, _path: &Path) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_source_reads_content() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("scene.txt");
        fs::write(&path, "HAMLET. Words, words, words.").unwrap();

        let text = FileSource.fetch(&path).unwrap();
        assert_eq!(text, "HAMLET. Words, words, words.");
    }

    #[test]
    fn test_file_source_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.txt");

        let err = FileSource.fetch(&path).unwrap_err();
        let SourceError::Unavailable { path: reported, .. } = err;
        assert_eq!(reported, path);
    }

    #[test]
    fn test_static_source_ignores_path() {
        let source = StaticSource::new("fixed");
        assert_eq!(source.fetch(Path::new("/anywhere")).unwrap(), "fixed");
    }
}
