//! HTML to plain text conversion

use scraper::{Html, Node};

/// Elements whose text never belongs in the output
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript"];

/// Converts an HTML document into cleaned plain text
///
/// Every text run outside `script`, `style` and `noscript` is trimmed; empty
/// runs are dropped and the rest are joined with newlines.
///
/// # Example
///
/// ```
/// use docs_harvest::extract::html_to_text;
///
/// let html = "<html><body><h1> Title </h1><script>x()</script><p>Body</p></body></html>";
/// assert_eq!(html_to_text(html), "Title\nBody");
/// ```
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut runs: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let skipped = node.ancestors().any(|ancestor| {
            matches!(
                ancestor.value(),
                Node::Element(element) if SKIPPED_TAGS.contains(&element.name())
            )
        });
        if skipped {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            runs.push(trimmed);
        }
    }

    runs.join("\n")
}
