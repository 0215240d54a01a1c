use std::collections::{HashSet, VecDeque};

/// Traversal state for a single crawl run
///
/// Holds the frontier queue, the visited set and the discovered set. The
/// invariants are enforced here rather than by callers:
///
/// - every URL placed in the frontier is discovered at the same time
/// - no URL is enqueued twice
/// - visited is a subset of discovered, and both only grow
#[derive(Debug, Default)]
pub struct CrawlState {
    /// FIFO of canonical URLs awaiting a fetch
    frontier: VecDeque<String>,

    /// URLs whose fetch has been attempted
    visited: HashSet<String>,

    /// Every URL ever found
    discovered: HashSet<String>,

    /// Discovered URLs in discovery order
    order: Vec<String>,

    /// Visited URLs whose fetch failed
    failed: HashSet<String>,
}

impl CrawlState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly found URL and enqueues it
    ///
    /// Returns false (and changes nothing) if the URL was already discovered.
    pub fn discover(&mut self, url: &str) -> bool {
        if self.discovered.contains(url) {
            return false;
        }

        self.discovered.insert(url.to_string());
        self.order.push(url.to_string());
        self.frontier.push_back(url.to_string());
        true
    }

    /// Pops the next URL that still needs a fetch and marks it visited
    ///
    /// Already-visited entries are skipped. The enqueue-once invariant means
    /// this should never happen, but it is tolerated.
    pub fn next_pending(&mut self) -> Option<String> {
        while let Some(url) = self.frontier.pop_front() {
            if self.visited.contains(&url) {
                tracing::debug!("Skipping already visited URL: {}", url);
                continue;
            }
            self.visited.insert(url.clone());
            return Some(url);
        }
        None
    }

    /// Marks a visited URL as failed
    pub fn mark_failed(&mut self, url: &str) {
        if self.visited.contains(url) {
            self.failed.insert(url.to_string());
        }
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Number of URLs waiting in the frontier
    pub fn pending_count(&self) -> usize {
        self.frontier.len()
    }

    /// Consumes the state, returning discovered URLs in discovery order
    pub fn into_discovered(self) -> Vec<String> {
        self.order
    }
}
