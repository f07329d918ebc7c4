//! Topic page rendering.
//!
//! Resolves an externally supplied topic identifier to a markdown document
//! and produces a complete HTML page. Every failure path degrades to a valid
//! HTML page — rendering never returns an error to the caller.

use std::sync::Arc;

use crate::html;
use crate::render::markdown_to_html;
use crate::source::{ContentSource, SourceError};

/// Strip every character outside `[a-zA-Z0-9-_]` from a topic identifier.
///
/// Idempotent: sanitizing twice equals sanitizing once.
#[must_use]
pub fn sanitize_topic(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Renders topic pages from a content source.
pub struct TopicRenderer {
    source: Arc<dyn ContentSource>,
}

impl TopicRenderer {
    /// Create a renderer backed by the given content source.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Render the page for a raw topic identifier.
    ///
    /// The identifier is sanitized and resolved to `<topic>.md`. A missing
    /// document yields the "Coming Soon" placeholder (embedding the original
    /// identifier); any other read failure is logged and yields a generic
    /// error page.
    #[must_use]
    pub fn render(&self, raw_topic: &str) -> String {
        let topic = sanitize_topic(raw_topic);
        let document = format!("{topic}.md");
        match self.source.read(&document) {
            Ok(markdown) => html::article_page(&topic, &markdown_to_html(&markdown)),
            Err(SourceError::NotFound(_)) => html::coming_soon_page(raw_topic),
            Err(err) => {
                tracing::error!(topic = %topic, error = %err, "Failed to read topic content");
                html::error_page(&topic)
            }
        }
    }
}
