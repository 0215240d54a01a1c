//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with explicit success/failure results
//! - HTML anchor extraction and link resolution
//! - Frontier scheduling and the politeness delay
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{run_crawl, Coordinator, CrawlReport, FailedPage};
pub use fetcher::{build_http_client, fetch_url, FetchFailure, FetchResult, Fetcher, HttpFetcher};
pub use parser::{extract_anchors, resolve_link};
pub use scheduler::Scheduler;

use crate::config::Config;
use crate::HarvestError;
use std::path::Path;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the scope from the base prefix and exclusions
/// 2. Build the HTTP client
/// 3. Create the link file
/// 4. Crawl breadth-first from `start_url`, appending each new link
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `start_url` - First page to fetch; may be relative to `base_prefix`
/// * `base_prefix` - Only links starting with this prefix are followed
/// * `extra_excludes` - Exclusions added on top of the configured ones
/// * `output` - Path of the link file
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(HarvestError)` - Start URL out of scope, or the link file failed
pub async fn crawl(
    config: &Config,
    start_url: &str,
    base_prefix: &str,
    extra_excludes: &[String],
    output: &Path,
) -> Result<CrawlReport, HarvestError> {
    run_crawl(config, start_url, base_prefix, extra_excludes, output).await
}
