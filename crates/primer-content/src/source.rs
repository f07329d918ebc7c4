//! Content source abstraction.
//!
//! Provides the [`ContentSource`] trait for reading named markdown documents,
//! decoupling the pipeline from the underlying storage. [`FsSource`] is the
//! filesystem implementation; `MockSource` (behind the `mock` feature) backs
//! unit tests.

use std::path::{Component, Path, PathBuf};

/// Error reading from a content source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Document does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Document name escapes the content root or is otherwise malformed.
    #[error("invalid document name: {0}")]
    InvalidName(String),

    /// Any other read failure.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// True if the error means the document simply doesn't exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Read-only access to named markdown documents.
///
/// Names are flat file names relative to the content root (e.g. `"intro.md"`,
/// `"README.md"`). Implementations map names to their own storage format.
pub trait ContentSource: Send + Sync {
    /// Read the full text of a document.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the document doesn't exist or can't be read.
    fn read(&self, name: &str) -> Result<String, SourceError>;

    /// Check whether a document exists. Returns `false` on errors.
    fn exists(&self, name: &str) -> bool;
}

/// Filesystem-backed content source.
///
/// Reads documents from a root directory. Each call opens the file, reads it
/// fully, and closes it — no state is shared between reads.
pub struct FsSource {
    /// Root directory containing markdown documents.
    root: PathBuf,
}

impl FsSource {
    /// Create a new filesystem source rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve a document name against the root directory.
    ///
    /// Rejects names containing parent directory components (`..`) to prevent
    /// path traversal (e.g. `../../../etc/passwd`).
    fn resolve(&self, name: &str) -> Result<PathBuf, SourceError> {
        let rel = Path::new(name);
        if rel
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(SourceError::InvalidName(name.to_owned()));
        }
        Ok(self.root.join(rel))
    }
}

impl ContentSource for FsSource {
    fn read(&self, name: &str) -> Result<String, SourceError> {
        let path = self.resolve(name)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(path))
            }
            Err(err) => Err(SourceError::Io { path, source: err }),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_ok_and(|path| path.is_file())
    }
}
