//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Validating and seeding the start URL
//! - Draining the frontier in breadth-first order
//! - Coordinating fetching, anchor extraction and scope filtering
//! - Writing every newly discovered URL to the link sink

use crate::config::Config;
use crate::crawler::fetcher::{FetchFailure, FetchResult, Fetcher, HttpFetcher};
use crate::crawler::parser::{extract_anchors, resolve_link};
use crate::crawler::scheduler::Scheduler;
use crate::output::{log_crawl_summary, progress_line, CrawlSummary, LinkSink};
use crate::url::{is_http_url, normalize_url, Scope};
use crate::HarvestError;
use chrono::Utc;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// A page whose fetch failed during the crawl
#[derive(Debug, Clone, PartialEq)]
pub struct FailedPage {
    pub url: String,
    pub reason: FetchFailure,
}

/// Everything a finished crawl hands back to its caller
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Discovered URLs in discovery order (same content as the link file)
    pub links: Vec<String>,

    /// Fetch failures, in visit order
    pub failures: Vec<FailedPage>,

    pub summary: CrawlSummary,
}

/// Main crawler coordinator structure
pub struct Coordinator<F: Fetcher, W: Write> {
    scope: Scope,
    fetcher: F,
    sink: LinkSink<W>,
    delay: Duration,
}

impl<F: Fetcher, W: Write> Coordinator<F, W> {
    /// Creates a new coordinator
    ///
    /// # Arguments
    ///
    /// * `scope` - Base prefix and exclusions every followed link must satisfy
    /// * `fetcher` - Source of page bodies
    /// * `sink` - Destination for discovered URLs
    /// * `delay` - Pause after every processed page
    pub fn new(scope: Scope, fetcher: F, sink: LinkSink<W>, delay: Duration) -> Self {
        Self {
            scope,
            fetcher,
            sink,
            delay,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns the link sink, consuming the coordinator
    pub fn into_sink(self) -> LinkSink<W> {
        self.sink
    }

    /// Runs the main crawl loop
    ///
    /// This is the core crawling logic that:
    /// 1. Resolves the start URL against the base prefix and checks its scope
    /// 2. Pops the frontier head and fetches it
    /// 3. Extracts anchors and resolves, normalizes and filters each one
    /// 4. Records new URLs in the sink and the frontier
    /// 5. Pauses, then repeats until the frontier is empty
    ///
    /// Traversal state is created fresh for every call.
    ///
    /// # Errors
    ///
    /// * `HarvestError::ScopeViolation` - The start URL is outside the scope;
    ///   nothing has been fetched or written
    /// * `HarvestError::Io` - The link sink could not be written
    pub async fn run(&mut self, start_url: &str) -> Result<CrawlReport, HarvestError> {
        let started_at = Utc::now();
        let seed = self.resolve_seed(start_url)?;

        let mut scheduler = Scheduler::new(self.delay);
        self.discover(&mut scheduler, &seed)?;
        tracing::info!("Queued start URL {}", seed);

        let mut failures = Vec::new();

        while let Some(url) = scheduler.next_url() {
            let state = scheduler.state();
            tracing::info!(
                "{}",
                progress_line(
                    state.visited_count(),
                    state.discovered_count(),
                    state.pending_count(),
                    &url
                )
            );

            match self.fetcher.fetch(&url).await {
                FetchResult::Success {
                    final_url, body, ..
                } => {
                    // Canonical URLs lose their trailing slash, so resolve
                    // against the URL the page was served from after redirects
                    self.handle_discovered_links(&mut scheduler, &final_url, &body)?;
                }
                FetchResult::Failure(reason) => {
                    tracing::warn!("Failed to fetch {} ({})", url, reason);
                    scheduler.record_failure(&url);
                    failures.push(FailedPage { url, reason });
                }
            }

            scheduler.pause().await;
        }

        tracing::debug!("Frontier is empty, crawl complete");

        let state = scheduler.into_state();
        let summary = CrawlSummary {
            started_at,
            finished_at: Utc::now(),
            discovered: state.discovered_count(),
            visited: state.visited_count(),
            failed: state.failed_count(),
        };
        log_crawl_summary(&summary);

        Ok(CrawlReport {
            links: state.into_discovered(),
            failures,
            summary,
        })
    }

    /// Resolves and validates the start URL
    ///
    /// The start URL may be relative to the base prefix (e.g. `overview`).
    fn resolve_seed(&self, start_url: &str) -> Result<String, HarvestError> {
        let base_dir = format!("{}/", self.scope.base_prefix().trim_end_matches('/'));
        let absolute = Url::parse(&base_dir)
            .ok()
            .and_then(|base| resolve_link(start_url, &base))
            .unwrap_or_else(|| start_url.to_string());
        let seed = normalize_url(&absolute);

        if !self.scope.allows(&seed) {
            return Err(HarvestError::ScopeViolation {
                url: seed,
                prefix: self.scope.base_prefix().to_string(),
            });
        }

        Ok(seed)
    }

    /// Handles the anchors of a fetched page
    ///
    /// Each href is resolved against `page_url` (the post-redirect location),
    /// normalized, and dropped if it is not http(s), out of scope, or already
    /// discovered.
    fn handle_discovered_links(
        &mut self,
        scheduler: &mut Scheduler,
        page_url: &str,
        body: &str,
    ) -> Result<(), HarvestError> {
        let base_url = match Url::parse(page_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Cannot resolve links on {}: {}", page_url, e);
                return Ok(());
            }
        };

        for href in extract_anchors(body) {
            let absolute = match resolve_link(&href, &base_url) {
                Some(absolute) => absolute,
                None => continue,
            };

            let normalized = normalize_url(&absolute);
            if !is_http_url(&normalized) {
                continue;
            }
            if !self.scope.allows(&normalized) {
                tracing::trace!("Out of scope: {}", normalized);
                continue;
            }

            self.discover(scheduler, &normalized)?;
        }

        Ok(())
    }

    /// Enqueues a URL if new and appends it to the sink
    fn discover(&mut self, scheduler: &mut Scheduler, url: &str) -> Result<(), HarvestError> {
        if scheduler.schedule(url) {
            self.sink.append(url)?;
        }
        Ok(())
    }
}

/// Runs a crawl over HTTP, writing discovered links to `output`
///
/// This function orchestrates the entire crawl process:
///
/// 1. Build the scope from `base_prefix` plus configured and extra exclusions
/// 2. Build the HTTP client
/// 3. Create (truncate) the link file
/// 4. Run the coordinator from `start_url`
///
/// # Example
///
/// ```no_run
/// use docs_harvest::config::Config;
/// use docs_harvest::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(
///     &Config::default(),
///     "https://example.com/docs/overview",
///     "https://example.com/docs",
///     &["/reference".to_string()],
///     Path::new("links.txt"),
/// )
/// .await?;
/// println!("{} links", report.links.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(
    config: &Config,
    start_url: &str,
    base_prefix: &str,
    extra_excludes: &[String],
    output: &Path,
) -> Result<CrawlReport, HarvestError> {
    let excludes: Vec<String> = config
        .crawler
        .exclude
        .iter()
        .chain(extra_excludes)
        .cloned()
        .collect();
    let scope = Scope::new(base_prefix, &excludes);
    if !scope.excludes().is_empty() {
        tracing::info!("Excluding paths: {}", scope.excludes().join(", "));
    }

    let fetcher = HttpFetcher::new(&config.user_agent, config.crawler.request_timeout())?;
    let sink = LinkSink::create(output)?;

    let mut coordinator = Coordinator::new(scope, fetcher, sink, config.crawler.delay());
    coordinator.run(start_url).await
}
