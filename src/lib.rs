//! Docs-Harvest: a prefix-scoped documentation crawler
//!
//! This crate collects every internal link reachable beneath a documentation
//! URL prefix, fetches each page as plain text, and concatenates the pages
//! into one aggregate file.

pub mod combine;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod logging;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Docs-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Start URL {url} is outside the permitted prefix {prefix}")]
    ScopeViolation { url: String, prefix: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Docs-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator, CrawlReport};
pub use url::{is_allowed, normalize_url, Scope};
