//! Crawl and extraction statistics
//!
//! This module provides the summaries reported at the end of a run and the
//! per-page progress line logged while crawling.

use chrono::{DateTime, Utc};

/// Summary statistics for a crawl run
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Unique URLs found (equals the number of lines in the link file)
    pub discovered: usize,

    /// URLs whose fetch was attempted
    pub visited: usize,

    /// Visited URLs whose fetch failed
    pub failed: usize,
}

impl CrawlSummary {
    /// Visited URLs that were fetched and parsed
    pub fn succeeded(&self) -> usize {
        self.visited.saturating_sub(self.failed)
    }

    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    /// Returns the success rate as a percentage of visited pages
    pub fn success_rate(&self) -> f64 {
        if self.visited == 0 {
            0.0
        } else {
            (self.succeeded() as f64 / self.visited as f64) * 100.0
        }
    }
}

/// Logs a crawl summary at info level
pub fn log_crawl_summary(summary: &CrawlSummary) {
    tracing::info!(
        "Crawl finished in {:.1}s: {} discovered, {} visited, {} failed ({:.1}% success)",
        summary.duration_seconds(),
        summary.discovered,
        summary.visited,
        summary.failed,
        summary.success_rate()
    );
}

/// Progress line emitted before each fetch
pub fn progress_line(visited: usize, discovered: usize, pending: usize, url: &str) -> String {
    format!(
        "[{} processed | {} discovered | {} pending] fetching {}",
        visited, discovered, pending, url
    )
}

/// Summary statistics for a text extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// URLs read from the link file
    pub processed: usize,

    /// Text files written
    pub stored: usize,

    /// URLs whose fetch failed
    pub failed: usize,

    /// URLs fetched but yielding no text
    pub empty: usize,
}
