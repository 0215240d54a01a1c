//! Text extraction module
//!
//! This module fetches every URL of a link file, converts each page to plain
//! text and stores it under a directory tree mirroring the URL.

mod paths;
mod text;

pub use paths::derive_output_path;
pub use text::html_to_text;

use crate::config::Config;
use crate::crawler::{FetchResult, Fetcher, HttpFetcher};
use crate::output::ExtractionSummary;
use crate::HarvestError;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Reads the non-blank lines of a link file, trimmed
pub fn read_links(path: &Path) -> io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Fetches pages and writes their text below an output directory
pub struct Extractor<F: Fetcher> {
    fetcher: F,
    output_dir: PathBuf,

    /// Pause after each stored page
    delay: Duration,
}

impl<F: Fetcher> Extractor<F> {
    pub fn new(fetcher: F, output_dir: &Path, delay: Duration) -> Self {
        Self {
            fetcher,
            output_dir: output_dir.to_path_buf(),
            delay,
        }
    }

    /// Processes every URL in order
    ///
    /// Fetch failures, pages without text and URLs that cannot be mapped to a
    /// file are logged and skipped. Only filesystem errors abort the run.
    pub async fn run(&self, links: &[String]) -> io::Result<ExtractionSummary> {
        let mut summary = ExtractionSummary::default();

        for url in links {
            summary.processed += 1;
            tracing::info!("[{}] fetching {}", summary.processed, url);

            let body = match self.fetcher.fetch(url).await {
                FetchResult::Success { body, .. } => body,
                FetchResult::Failure(reason) => {
                    tracing::warn!("Failed to fetch {} ({})", url, reason);
                    summary.failed += 1;
                    continue;
                }
            };

            let text = html_to_text(&body);
            if text.is_empty() {
                tracing::warn!("No textual content extracted from {}", url);
                summary.empty += 1;
                continue;
            }

            let target = match derive_output_path(&self.output_dir, url) {
                Some(target) => target,
                None => {
                    tracing::warn!("Cannot map {} to an output path", url);
                    continue;
                }
            };

            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&target, text)?;
            summary.stored += 1;
            tracing::info!("    wrote {}", target.display());

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        Ok(summary)
    }
}

/// Runs a complete extraction over HTTP
///
/// # Arguments
///
/// * `config` - Configuration; the extractor section sets timeout and delay
/// * `link_file` - Newline-delimited URL list, typically from `crawl-links`
/// * `output_dir` - Root of the text file tree
pub async fn run_extraction(
    config: &Config,
    link_file: &Path,
    output_dir: &Path,
) -> Result<ExtractionSummary, HarvestError> {
    let links = read_links(link_file)?;
    tracing::info!("Loaded {} URLs from {}", links.len(), link_file.display());

    let fetcher = HttpFetcher::new(&config.user_agent, config.extractor.request_timeout())?;
    let extractor = Extractor::new(fetcher, output_dir, config.extractor.delay());
    Ok(extractor.run(&links).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::FetchFailure;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tempfile::TempDir;

    struct StaticFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> FetchResult {
            match self.pages.get(url) {
                Some(body) => FetchResult::Success {
                    final_url: url.to_string(),
                    status_code: 200,
                    body: body.clone(),
                },
                None => FetchResult::Failure(FetchFailure::Status(404)),
            }
        }
    }

    fn fetcher(pages: &[(&str, &str)]) -> StaticFetcher {
        StaticFetcher {
            pages: pages
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_read_links_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.txt");
        std::fs::write(&path, "https://x.com/a\n\n  https://x.com/b  \n   \n").unwrap();

        assert_eq!(
            read_links(&path).unwrap(),
            vec!["https://x.com/a", "https://x.com/b"]
        );
    }

    #[test]
    fn test_read_links_missing_file() {
        assert!(read_links(Path::new("/nonexistent/links.txt")).is_err());
    }

    #[tokio::test]
    async fn test_run_stores_text_and_counts() {
        let dir = TempDir::new().unwrap();
        let extractor = Extractor::new(
            fetcher(&[
                ("https://x.com/docs", "<p>Home</p>"),
                ("https://x.com/docs/guide.html", "<h1>Guide</h1><p>Steps</p>"),
                ("https://x.com/docs/blank", "<script>only()</script>"),
            ]),
            dir.path(),
            Duration::ZERO,
        );

        let links: Vec<String> = [
            "https://x.com/docs",
            "https://x.com/docs/guide.html",
            "https://x.com/docs/blank",
            "https://x.com/docs/missing",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let summary = extractor.run(&links).await.unwrap();

        assert_eq!(
            summary,
            ExtractionSummary {
                processed: 4,
                stored: 2,
                failed: 1,
                empty: 1,
            }
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("x.com/docs.txt")).unwrap(),
            "Home"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("x.com/docs/guide.txt")).unwrap(),
            "Guide\nSteps"
        );
        assert!(!dir.path().join("x.com/docs/blank.txt").exists());
        assert!(!dir.path().join("x.com/docs/missing.txt").exists());
    }
}
