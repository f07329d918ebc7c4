//! Markdown-to-HTML rewrite pipeline.
//!
//! Converts markdown to HTML through a fixed, ordered chain of text
//! substitutions rather than a structural parse. Each stage is a pure
//! function over the whole text, so later stages operate on the output of
//! earlier ones: headings and emphasis must be resolved before paragraph
//! wrapping, and fence delimiters must be consumed before the inline
//! backtick pass sees them.
//!
//! This is deliberately not a full markdown parser — no nested lists, no
//! body links, no tables. The rewrite rules are fragile approximations
//! (content inside code fences is still visible to the heading and emphasis
//! passes) and are kept simple because article content is authored in-house.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```([A-Za-z0-9_+-]*)\n(.*?)```").unwrap());
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// A single rewrite pass over the whole text.
type Stage = fn(&str) -> String;

/// Rewrite stages in application order. Paragraph wrapping must stay last.
const STAGES: [Stage; 6] = [
    headings,
    strong,
    emphasis,
    fenced_code,
    inline_code,
    paragraphs,
];

/// Convert a markdown document to an HTML fragment.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    STAGES
        .iter()
        .fold(markdown.to_owned(), |text, stage| stage(&text))
}

/// Rewrite `#`/`##`/`###` lines to `<h1>`/`<h2>`/`<h3>`.
pub(crate) fn headings(text: &str) -> String {
    let text = H3_RE.replace_all(text, "<h3>$1</h3>");
    let text = H2_RE.replace_all(&text, "<h2>$1</h2>");
    H1_RE.replace_all(&text, "<h1>$1</h1>").into_owned()
}

/// Rewrite `**text**` to `<strong>text</strong>`.
pub(crate) fn strong(text: &str) -> String {
    STRONG_RE
        .replace_all(text, "<strong>$1</strong>")
        .into_owned()
}

/// Rewrite `*text*` to `<em>text</em>`. Runs after [`strong`] so double
/// asterisks are already consumed.
pub(crate) fn emphasis(text: &str) -> String {
    EM_RE.replace_all(text, "<em>$1</em>").into_owned()
}

/// Rewrite triple-backtick fences to `<pre><code>` blocks, keeping the
/// language hint as a `language-*` class when present.
pub(crate) fn fenced_code(text: &str) -> String {
    FENCE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let lang = &caps[1];
            let code = caps[2].trim_end_matches('\n');
            if lang.is_empty() {
                format!("<pre><code>{code}</code></pre>")
            } else {
                format!("<pre><code class=\"language-{lang}\">{code}</code></pre>")
            }
        })
        .into_owned()
}

/// Rewrite single-backtick spans to `<code>`.
pub(crate) fn inline_code(text: &str) -> String {
    INLINE_CODE_RE
        .replace_all(text, "<code>$1</code>")
        .into_owned()
}

/// Split on double newlines and wrap bare blocks in `<p>`.
///
/// Blocks already starting with a tag (headings, code blocks) are left
/// untouched so they are never double-wrapped.
pub(crate) fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if block.starts_with('<') {
                block.to_owned()
            } else {
                format!("<p>{block}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
