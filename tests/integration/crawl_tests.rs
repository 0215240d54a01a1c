use crate::{mount_page, mount_status, test_config};
use docs_harvest::crawler::crawl;
use docs_harvest::HarvestError;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("link file should exist")
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_crawl_writes_links_in_discovery_order() {
    let server = MockServer::start().await;
    let base = format!("{}/docs", server.uri());

    mount_page(
        &server,
        "/docs",
        r#"<html><body>
            <a href="/docs/a">A</a>
            <a href="/docs/b/">B</a>
            <a href="/other">Outside</a>
            <a href="mailto:team@example.com">Mail</a>
        </body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/docs/a",
        r#"<a href="/docs/c#section">C</a><a href="/docs/a">Self</a>"#,
    )
    .await;
    mount_page(&server, "/docs/b", r#"<a href="/docs">Home</a>"#).await;
    mount_page(&server, "/docs/c", "<p>Leaf</p>").await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("links.txt");

    let report = crawl(&test_config(), &base, &base, &[], &output)
        .await
        .expect("crawl should succeed");

    let expected = vec![
        format!("{}/docs", server.uri()),
        format!("{}/docs/a", server.uri()),
        format!("{}/docs/b", server.uri()),
        format!("{}/docs/c", server.uri()),
    ];
    assert_eq!(read_lines(&output), expected);
    assert_eq!(report.links, expected);
    assert!(report.failures.is_empty());
    assert_eq!(report.summary.visited, 4);
}

#[tokio::test]
async fn test_failed_page_does_not_stop_crawl() {
    let server = MockServer::start().await;
    let base = format!("{}/docs", server.uri());

    mount_page(
        &server,
        "/docs",
        r#"<a href="/docs/broken">Broken</a><a href="/docs/ok">Ok</a>"#,
    )
    .await;
    mount_status(&server, "/docs/broken", 500).await;
    mount_page(&server, "/docs/ok", r#"<a href="/docs/deeper">Deeper</a>"#).await;
    mount_page(&server, "/docs/deeper", "<p>Done</p>").await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("links.txt");

    let report = crawl(&test_config(), &base, &base, &[], &output)
        .await
        .expect("crawl should succeed");

    assert_eq!(read_lines(&output).len(), 4);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].url, format!("{}/docs/broken", server.uri()));
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.visited, 4);
}

#[tokio::test]
async fn test_exclusions_skip_subtrees() {
    let server = MockServer::start().await;
    let base = format!("{}/docs", server.uri());

    mount_page(
        &server,
        "/docs",
        r#"<a href="/docs/reference/api">Api</a><a href="/docs/guide">Guide</a>"#,
    )
    .await;
    mount_page(&server, "/docs/guide", "<p>Guide</p>").await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("links.txt");

    let mut config = test_config();
    config.crawler.exclude = vec!["reference".to_string()];

    crawl(&config, &base, &base, &[], &output).await.unwrap();

    assert_eq!(
        read_lines(&output),
        vec![
            format!("{}/docs", server.uri()),
            format!("{}/docs/guide", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_relative_start_url() {
    let server = MockServer::start().await;
    let base = format!("{}/docs", server.uri());

    mount_page(&server, "/docs/overview", r#"<a href="/docs/setup">Setup</a>"#).await;
    mount_page(&server, "/docs/setup", "<p>Setup</p>").await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("links.txt");

    crawl(&test_config(), "overview", &base, &[], &output)
        .await
        .unwrap();

    assert_eq!(
        read_lines(&output),
        vec![
            format!("{}/docs/overview", server.uri()),
            format!("{}/docs/setup", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_relative_links_resolve_against_redirect_target() {
    let server = MockServer::start().await;
    let base = format!("{}/docs", server.uri());

    mount_page(&server, "/docs", r#"<a href="/docs/guide">Guide</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/docs/guide"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/docs/guide/"))
        .mount(&server)
        .await;
    mount_page(&server, "/docs/guide/", r#"<a href="setup">Setup</a>"#).await;
    mount_page(&server, "/docs/guide/setup", "<p>Setup</p>").await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("links.txt");

    let report = crawl(&test_config(), &base, &base, &[], &output)
        .await
        .unwrap();

    assert_eq!(
        read_lines(&output),
        vec![
            format!("{}/docs", server.uri()),
            format!("{}/docs/guide", server.uri()),
            format!("{}/docs/guide/setup", server.uri()),
        ]
    );
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn test_scope_violation_leaves_empty_file() {
    let server = MockServer::start().await;
    let base = format!("{}/docs", server.uri());
    let start = format!("{}/blog", server.uri());

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("links.txt");

    let err = crawl(&test_config(), &start, &base, &[], &output)
        .await
        .unwrap_err();

    match err {
        HarvestError::ScopeViolation { url, prefix } => {
            assert_eq!(url, start);
            assert_eq!(prefix, base);
        }
        other => panic!("expected scope violation, got {:?}", other),
    }
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
    assert!(server.received_requests().await.unwrap().is_empty());
}
