//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing the pipeline and HTTP handlers
//! without filesystem access, including injectable read failures.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::source::{ContentSource, SourceError};

/// In-memory content source for tests.
///
/// Use the builder methods to configure documents and failure injection.
///
/// # Example
///
/// ```ignore
/// use primer_content::{ContentSource, MockSource};
///
/// let source = MockSource::new()
///     .with_content("intro.md", "# Intro\n")
///     .with_failure("broken.md");
///
/// assert!(source.read("intro.md").is_ok());
/// assert!(source.read("broken.md").is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    contents: HashMap<String, String>,
    failures: HashSet<String>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given name and content.
    #[must_use]
    pub fn with_content(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.contents.insert(name.into(), content.into());
        self
    }

    /// Make reads of the given name fail with a non-NotFound I/O error.
    #[must_use]
    pub fn with_failure(mut self, name: impl Into<String>) -> Self {
        self.failures.insert(name.into());
        self
    }
}

impl ContentSource for MockSource {
    fn read(&self, name: &str) -> Result<String, SourceError> {
        if self.failures.contains(name) {
            return Err(SourceError::Io {
                path: PathBuf::from(name),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "injected"),
            });
        }
        self.contents
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(PathBuf::from(name)))
    }

    fn exists(&self, name: &str) -> bool {
        self.contents.contains_key(name)
    }
}
