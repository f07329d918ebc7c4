//! Markdown content pipeline for the Primer learning site.
//!
//! This crate provides the two independent units behind every page:
//!
//! - [`extract_toc`]: scans a markdown document for a `## Table of Contents`
//!   section and returns the ordered list of [`TocEntry`] items.
//! - [`TopicRenderer`]: resolves a topic identifier to a markdown document
//!   and converts it to a complete HTML page, degrading to a placeholder or
//!   error page instead of failing.
//!
//! Document access goes through the [`ContentSource`] trait so the pipeline
//! can be tested without touching the real filesystem ([`FsSource`] for
//! production, `MockSource` behind the `mock` feature for tests).
//!
//! The markdown conversion is an ordered chain of text substitutions, not a
//! structural parse — see the [`render`] module for the rule set.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use primer_content::{FsSource, TopicRenderer};
//!
//! let source = Arc::new(FsSource::new("content".into()));
//! let renderer = TopicRenderer::new(source);
//! let html = renderer.render("intro");
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

mod html;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod render;
mod source;
mod toc;
mod topic;

pub use html::{escape_html, toc_page};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSource;
pub use render::markdown_to_html;
pub use source::{ContentSource, FsSource, SourceError};
pub use toc::{TocEntry, extract_toc, load_toc};
pub use topic::{TopicRenderer, sanitize_topic};
