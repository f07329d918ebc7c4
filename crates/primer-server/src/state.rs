//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use primer_content::{ContentSource, TopicRenderer};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content source for reading documents.
    pub(crate) source: Arc<dyn ContentSource>,
    /// Topic renderer for markdown to HTML conversion.
    pub(crate) renderer: TopicRenderer,
    /// TOC source document name.
    pub(crate) toc_file: String,
    /// Directory of static assets.
    pub(crate) assets_dir: PathBuf,
    /// Enable verbose output.
    pub(crate) verbose: bool,
    /// Application version reported by `/status`.
    pub(crate) version: String,
    /// Server start time for uptime reporting.
    pub(crate) started: Instant,
}
