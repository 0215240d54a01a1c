//! State module for tracking crawl progress
//!
//! `CrawlState` owns the frontier queue and the visited and discovered sets
//! of a single crawl run.

mod crawl_state;

pub use crawl_state::CrawlState;
