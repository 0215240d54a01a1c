//! HTML anchor extraction
//!
//! This module turns a page body into the raw `href` values of its anchor
//! tags, and resolves those values against the page they came from.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the unique raw `href` values of all `<a>` tags
///
/// Values are returned in document order of their first occurrence and are
/// not resolved, normalized or filtered; empty values are dropped.
///
/// # Example
///
/// ```
/// use docs_harvest::crawler::extract_anchors;
///
/// let html = r#"<a href="/a">A</a><a href="b">B</a><a href="/a">again</a>"#;
/// assert_eq!(extract_anchors(html), vec!["/a", "b"]);
/// ```
pub fn extract_anchors(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut hrefs = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if !href.is_empty() && seen.insert(href) {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}

/// Resolves a raw href against the URL of the page it appeared on
///
/// Standard relative-reference resolution. Returns None for hrefs that do not
/// form a valid URL. Scheme filtering is left to the caller.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => Some(absolute_url.to_string()),
        Err(e) => {
            tracing::debug!("Failed to resolve href {:?} against {}: {}", href, base_url, e);
            None
        }
    }
}
