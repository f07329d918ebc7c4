//! Table-of-contents extraction.
//!
//! Scans a markdown document for a `## Table of Contents` section and
//! collects its link lines as ordered [`TocEntry`] items. The section ends at
//! the first blank line; everything after it is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::source::ContentSource;

/// Heading line that opens the table-of-contents section.
const TOC_HEADING: &str = "## Table of Contents";

/// First markdown link on a line: `[title](target)`, non-greedy.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

/// A single table-of-contents entry.
///
/// Entries keep their source order; duplicate anchors pass through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Display title from the link text.
    pub title: String,
    /// Anchor from the link target, without the leading `#`.
    pub anchor: String,
}

/// Extract table-of-contents entries from a markdown document.
///
/// Lines before the `## Table of Contents` heading are ignored. Inside the
/// section, a blank line ends scanning, lines without a `](#` link are
/// skipped, and the first `[title](target)` pair on each remaining line
/// becomes an entry. Only the first heading occurrence opens the section.
#[must_use]
pub fn extract_toc(markdown: &str) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    let mut in_toc = false;

    for line in markdown.lines() {
        if !in_toc {
            if line.starts_with(TOC_HEADING) {
                in_toc = true;
            }
            continue;
        }
        if line.trim().is_empty() {
            break;
        }
        if !line.contains("](#") {
            continue;
        }
        if let Some(caps) = LINK_RE.captures(line) {
            let target = &caps[2];
            entries.push(TocEntry {
                title: caps[1].to_owned(),
                anchor: target.strip_prefix('#').unwrap_or(target).to_owned(),
            });
        }
    }

    entries
}

/// Read a document from `source` and extract its table of contents.
///
/// A read failure is logged and degrades to an empty sequence — callers
/// never see an error.
#[must_use]
pub fn load_toc(source: &dyn ContentSource, name: &str) -> Vec<TocEntry> {
    match source.read(name) {
        Ok(text) => extract_toc(&text),
        Err(err) => {
            tracing::warn!(file = name, error = %err, "Failed to read TOC source");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(title: &str, anchor: &str) -> TocEntry {
        TocEntry {
            title: title.to_owned(),
            anchor: anchor.to_owned(),
        }
    }

    #[test]
    fn test_extract_entries_in_source_order() {
        let doc = "\
# Learning Rust

## Table of Contents
- [Intro](#intro)
- [Advanced](#advanced)

other text
";

        assert_eq!(
            extract_toc(doc),
            vec![entry("Intro", "intro"), entry("Advanced", "advanced")]
        );
    }

    #[test]
    fn test_no_heading_yields_empty() {
        let doc = "# Title\n\n- [Intro](#intro)\n";

        assert_eq!(extract_toc(doc), vec![]);
    }

    #[test]
    fn test_blank_line_terminates_section() {
        let doc = "\
## Table of Contents
- [Intro](#intro)

- [After](#after)
";

        assert_eq!(extract_toc(doc), vec![entry("Intro", "intro")]);
    }

    #[test]
    fn test_non_link_lines_are_skipped() {
        let doc = "\
## Table of Contents
some prose without a link
- [Intro](#intro)
- plain bullet
- [Next](#next)
";

        assert_eq!(
            extract_toc(doc),
            vec![entry("Intro", "intro"), entry("Next", "next")]
        );
    }

    #[test]
    fn test_target_without_hash_kept_verbatim() {
        let doc = "\
## Table of Contents
- [External](#ext) and [ignored](other.md)
";

        // Only the first link on the line is taken.
        assert_eq!(extract_toc(doc), vec![entry("External", "ext")]);
    }

    #[test]
    fn test_duplicate_anchors_pass_through() {
        let doc = "\
## Table of Contents
- [One](#same)
- [Two](#same)
";

        assert_eq!(
            extract_toc(doc),
            vec![entry("One", "same"), entry("Two", "same")]
        );
    }

    #[test]
    fn test_heading_must_be_line_prefix() {
        let doc = "intro ## Table of Contents\n- [Intro](#intro)\n";

        assert_eq!(extract_toc(doc), vec![]);
    }

    #[test]
    fn test_heading_is_case_sensitive() {
        let doc = "## table of contents\n- [Intro](#intro)\n";

        assert_eq!(extract_toc(doc), vec![]);
    }

    #[test]
    fn test_load_toc_reads_source() {
        let source = crate::MockSource::new()
            .with_content("README.md", "## Table of Contents\n- [Intro](#intro)\n");

        assert_eq!(
            load_toc(&source, "README.md"),
            vec![entry("Intro", "intro")]
        );
    }

    #[test]
    fn test_load_toc_missing_source_degrades_to_empty() {
        let source = crate::MockSource::new();

        assert_eq!(load_toc(&source, "README.md"), vec![]);
    }

    #[test]
    fn test_load_toc_read_failure_degrades_to_empty() {
        let source = crate::MockSource::new().with_failure("README.md");

        assert_eq!(load_toc(&source, "README.md"), vec![]);
    }
}
