//! Configuration module for Docs-Harvest
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file shared by the crawl and extraction tools.
//!
//! # Example
//!
//! ```no_run
//! use docs_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawler will pause {}ms between pages", config.crawler.delay_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, ExtractorConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
