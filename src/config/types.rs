use serde::Deserialize;
use std::time::Duration;

/// Browser-like user agent; some documentation hosts block unknown clients
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0 Safari/537.36";

/// Main configuration structure for Docs-Harvest
///
/// Every key is optional; a missing file or section yields the defaults.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    pub crawler: CrawlerConfig,

    pub extractor: ExtractorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            crawler: CrawlerConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

/// Link crawler behavior configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Pause after every processed page (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Path segments below the base prefix that are never followed
    pub exclude: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 250,
            request_timeout_secs: 15,
            exclude: Vec::new(),
        }
    }
}

impl CrawlerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Text extractor behavior configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Pause after every stored page (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            delay_ms: 250,
            request_timeout_secs: 20,
        }
    }
}

impl ExtractorConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
