//! HTML page templates and escaping.
//!
//! Every page the site serves goes through the shared [`shell`], so the
//! placeholder and error pages are complete, valid documents just like
//! rendered articles.

use std::fmt::Write;

use crate::toc::TocEntry;

/// Minimal inline stylesheet shared by all pages.
const STYLE: &str = "body{max-width:46rem;margin:2rem auto;padding:0 1rem;\
font-family:system-ui,sans-serif;line-height:1.6}\
pre{background:#f5f5f5;padding:1rem;overflow-x:auto}\
code{font-family:ui-monospace,monospace}\
nav{margin-bottom:2rem}";

/// Escape `&`, `<`, `>`, `"` and `'` for safe HTML interpolation.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap a body fragment in the shared document shell.
///
/// `title` must already be escaped; `body` is trusted HTML.
fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Contents</a></nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n"
    )
}

/// Complete article page for a rendered topic.
#[must_use]
pub(crate) fn article_page(topic: &str, content: &str) -> String {
    shell(&escape_html(topic), content)
}

/// Placeholder page for a topic with no backing document.
///
/// Embeds the original (escaped) topic name so readers see what they asked for.
#[must_use]
pub(crate) fn coming_soon_page(topic: &str) -> String {
    let escaped = escape_html(topic);
    shell(
        "Coming Soon",
        &format!(
            "<h1>Coming Soon</h1>\n<p>The article <strong>{escaped}</strong> \
             has not been written yet. Check back later.</p>"
        ),
    )
}

/// Generic error page for unexpected read failures.
#[must_use]
pub(crate) fn error_page(topic: &str) -> String {
    let escaped = escape_html(topic);
    shell(
        "Something went wrong",
        &format!(
            "<h1>Something went wrong</h1>\n<p>The article <strong>{escaped}</strong> \
             could not be loaded. Please try again later.</p>"
        ),
    )
}

/// Table-of-contents page linking each entry to its article.
#[must_use]
pub fn toc_page(entries: &[TocEntry]) -> String {
    let mut items = String::new();
    for entry in entries {
        let _ = writeln!(
            items,
            "<li><a href=\"/learn/{}\">{}</a></li>",
            escape_html(&entry.anchor),
            escape_html(&entry.title)
        );
    }
    let body = if entries.is_empty() {
        "<h1>Table of Contents</h1>\n<p>No articles yet.</p>".to_owned()
    } else {
        format!("<h1>Table of Contents</h1>\n<ul class=\"toc\">\n{items}</ul>")
    };
    shell("Table of Contents", &body)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>&\"quotes\"'</b>"),
            "&lt;b&gt;&amp;&quot;quotes&quot;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_shell_is_complete_document() {
        let page = shell("Title", "<p>body</p>");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Title</title>"));
        assert!(page.contains("<p>body</p>"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_coming_soon_page_embeds_topic() {
        let page = coming_soon_page("missing <topic>");

        assert!(page.contains("Coming Soon"));
        assert!(page.contains("missing &lt;topic&gt;"));
        assert!(!page.contains("<topic>"));
    }

    #[test]
    fn test_toc_page_links_entries() {
        let entries = vec![
            TocEntry {
                title: "Intro".to_owned(),
                anchor: "intro".to_owned(),
            },
            TocEntry {
                title: "Advanced".to_owned(),
                anchor: "advanced".to_owned(),
            },
        ];

        let page = toc_page(&entries);

        assert!(page.contains("<li><a href=\"/learn/intro\">Intro</a></li>"));
        assert!(page.contains("<li><a href=\"/learn/advanced\">Advanced</a></li>"));
        // Source order is preserved.
        assert!(page.find("intro").unwrap() < page.find("advanced").unwrap());
    }

    #[test]
    fn test_toc_page_empty() {
        let page = toc_page(&[]);

        assert!(page.contains("No articles yet"));
    }
}
