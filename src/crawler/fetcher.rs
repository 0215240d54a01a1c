//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawl and extraction tools:
//! - Building HTTP clients with the configured user agent and timeout
//! - GET requests to fetch page content (redirects are followed)
//! - Error classification into an inspectable [`FetchFailure`]
//!
//! A fetch never returns an error to the caller. Network, HTTP and decoding
//! problems all become [`FetchResult::Failure`], which the crawl treats as a
//! dead end for that one page.

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;

/// Upper bound on the TCP/TLS connect phase
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum redirect hops followed per request
const MAX_REDIRECTS: usize = 10;

/// Why a fetch produced no usable page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("failed to read body: {0}")]
    Body(String),

    #[error("empty response body")]
    Empty,

    #[error("request failed: {0}")]
    Request(String),
}

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// Successfully fetched a non-empty page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Decoded page body
        body: String,
    },

    /// Nothing usable came back
    Failure(FetchFailure),
}

/// Source of page bodies for the crawl and extraction loops
///
/// The HTTP implementation is [`HttpFetcher`]; tests substitute in-memory
/// link graphs.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, never failing past a [`FetchResult::Failure`]
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - Value of the User-Agent header
/// * `timeout` - Whole-request timeout; expiry is reported as [`FetchFailure::Timeout`]
///
/// # Example
///
/// ```no_run
/// use docs_harvest::config::DEFAULT_USER_AGENT;
/// use docs_harvest::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(DEFAULT_USER_AGENT, Duration::from_secs(15)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// # Outcome Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with a body | Success |
/// | 2xx with an empty body | Failure(Empty) |
/// | Any other status | Failure(Status) |
/// | Timeout | Failure(Timeout) |
/// | Connection refused, DNS or TLS error | Failure(Connect) |
/// | Body read error | Failure(Body) |
///
/// The body is decoded using the charset declared in Content-Type (UTF-8
/// when absent); undecodable bytes are replaced rather than rejected.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return FetchResult::Failure(classify_error(&e)),
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchResult::Failure(FetchFailure::Status(status.as_u16()));
    }

    match response.text().await {
        Ok(body) if body.is_empty() => FetchResult::Failure(FetchFailure::Empty),
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) if e.is_timeout() => FetchResult::Failure(FetchFailure::Timeout),
        Err(e) => FetchResult::Failure(FetchFailure::Body(e.to_string())),
    }
}

/// Maps a request error onto a failure reason
fn classify_error(error: &reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout
    } else if error.is_connect() {
        FetchFailure::Connect(error.to_string())
    } else if let Some(status) = error.status() {
        FetchFailure::Status(status.as_u16())
    } else {
        FetchFailure::Request(error.to_string())
    }
}

/// [`Fetcher`] backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with its own client
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent, timeout)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        let result = fetch_url(&self.client, url).await;
        if let FetchResult::Failure(reason) = &result {
            tracing::debug!("Fetch of {} failed: {}", url, reason);
        }
        result
    }
}
