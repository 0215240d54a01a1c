use crate::{mount_page, mount_status, test_config};
use docs_harvest::extract::run_extraction;
use tempfile::TempDir;
use wiremock::MockServer;

#[tokio::test]
async fn test_extraction_mirrors_url_layout() {
    let server = MockServer::start().await;
    let host = url::Url::parse(&server.uri()).unwrap();
    let netloc = format!("{}:{}", host.host_str().unwrap(), host.port().unwrap());

    mount_page(
        &server,
        "/docs/overview",
        "<html><head><title>Overview</title><style>p{}</style></head><body><p>Start here</p></body></html>",
    )
    .await;
    mount_page(&server, "/docs/guide.html", "<h1>Guide</h1>").await;
    mount_page(&server, "/docs/scripts", "<script>only()</script>").await;
    mount_status(&server, "/docs/gone", 404).await;

    let dir = TempDir::new().unwrap();
    let link_file = dir.path().join("links.txt");
    let pages = dir.path().join("pages");
    std::fs::write(
        &link_file,
        format!(
            "{0}/docs/overview\n\n{0}/docs/guide.html\n{0}/docs/scripts\n{0}/docs/gone\n",
            server.uri()
        ),
    )
    .unwrap();

    let summary = run_extraction(&test_config(), &link_file, &pages)
        .await
        .expect("extraction should succeed");

    assert_eq!(summary.processed, 4);
    assert_eq!(summary.stored, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.empty, 1);

    let site = pages.join(netloc);
    assert_eq!(
        std::fs::read_to_string(site.join("docs/overview.txt")).unwrap(),
        "Overview\nStart here"
    );
    assert_eq!(
        std::fs::read_to_string(site.join("docs/guide.txt")).unwrap(),
        "Guide"
    );
    assert!(!site.join("docs/scripts.txt").exists());
    assert!(!site.join("docs/gone.txt").exists());
}

#[tokio::test]
async fn test_missing_link_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = run_extraction(
        &test_config(),
        &dir.path().join("absent.txt"),
        &dir.path().join("pages"),
    )
    .await;

    assert!(result.is_err());
    assert!(!dir.path().join("pages").exists());
}
