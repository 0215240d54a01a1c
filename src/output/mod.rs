//! Output module for crawl results and reports
//!
//! This module handles:
//! - Writing discovered URLs durably as they are found
//! - Recording crawl and extraction statistics

mod sink;
pub mod stats;

pub use sink::LinkSink;
pub use stats::{log_crawl_summary, progress_line, CrawlSummary, ExtractionSummary};
