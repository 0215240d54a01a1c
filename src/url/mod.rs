//! URL handling module for Docs-Harvest
//!
//! This module provides URL normalization and the prefix/exclusion scope
//! filter that decides which links the crawler may follow.

mod normalize;
mod scope;

// Re-export main functions
pub use normalize::normalize_url;
pub use scope::{is_allowed, Scope};

/// Returns true if the URL uses the `http` or `https` scheme
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
