//! Scheduler for the crawl frontier and politeness delay
//!
//! This module handles:
//! - FIFO frontier management (strict breadth-first order)
//! - Enqueue-once admission through the discovered set
//! - The fixed pause applied after every processed page

use crate::state::CrawlState;
use std::time::Duration;

/// Scheduler manages the traversal state and request pacing
///
/// One scheduler lives for exactly one crawl run. It is never shared, so it
/// needs no locking.
#[derive(Debug)]
pub struct Scheduler {
    /// Frontier, visited and discovered sets
    state: CrawlState,

    /// Pause applied after each processed page
    delay: Duration,
}

impl Scheduler {
    /// Creates a scheduler with an empty frontier
    pub fn new(delay: Duration) -> Self {
        Self {
            state: CrawlState::new(),
            delay,
        }
    }

    /// Adds a URL to the frontier unless it was already discovered
    ///
    /// Returns true if the URL is new.
    pub fn schedule(&mut self, url: &str) -> bool {
        self.state.discover(url)
    }

    /// Gets the next URL to fetch, marking it visited
    ///
    /// # Returns
    ///
    /// * `Some(String)` - The frontier head
    /// * `None` - The frontier is empty and the crawl is done
    pub fn next_url(&mut self) -> Option<String> {
        self.state.next_pending()
    }

    /// Records that the fetch of a visited URL failed
    pub fn record_failure(&mut self, url: &str) {
        self.state.mark_failed(url);
    }

    /// Waits out the politeness delay
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    pub fn state(&self) -> &CrawlState {
        &self.state
    }

    pub fn into_state(self) -> CrawlState {
        self.state
    }
}
