//! End-to-end tests for the crawl, extract and combine stages
//!
//! These tests use wiremock to serve small documentation sites and tempfile
//! for scratch directories.

mod combine_tests;
mod crawl_tests;
mod extract_tests;

use docs_harvest::config::{Config, CrawlerConfig, ExtractorConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration with no politeness delay and short timeouts
pub fn test_config() -> Config {
    Config {
        user_agent: "docs-harvest-test/1.0".to_string(),
        crawler: CrawlerConfig {
            delay_ms: 0,
            request_timeout_secs: 5,
            exclude: Vec::new(),
        },
        extractor: ExtractorConfig {
            delay_ms: 0,
            request_timeout_secs: 5,
        },
    }
}

/// Serves `body` as HTML at `route`
pub async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Serves a bare status code at `route`
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
