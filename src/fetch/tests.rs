//! Tests for the fetch module

use super::*;
use std::time::Duration;
use wiremock::matchers::{headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_fetcher_config_default() {
    let config = FetcherConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.pacer.is_some());
    assert!(config.default_headers.contains_key("Accept"));
}

#[test]
fn test_fetcher_config_builder() {
    let config = FetcherConfig::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("jobharvest-test/1.0")
        .header("X-Test", "1")
        .no_pacer()
        .build();

    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.user_agent, "jobharvest-test/1.0");
    assert_eq!(config.default_headers.get("X-Test"), Some(&"1".to_string()));
    assert!(config.pacer.is_none());
}

#[test]
fn test_fetcher_default_has_pacer() {
    let fetcher = PageFetcher::default();
    assert!(fetcher.has_pacer());
}

#[tokio::test]
async fn test_fetch_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>ok</body></html>"))
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::with_config(FetcherConfig::builder().no_pacer().build());
    let body = fetcher
        .fetch_page(&format!("{}/jobs", mock_server.uri()))
        .await;

    assert_eq!(body, Some("<html><body>ok</body></html>".to_string()));
}

#[tokio::test]
async fn test_fetch_page_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(headers("Accept-Language", vec!["en-CA", "en;q=0.9"]))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::with_config(FetcherConfig::builder().no_pacer().build());
    let body = fetcher
        .fetch_page(&format!("{}/jobs", mock_server.uri()))
        .await;

    assert!(body.is_some());
}

#[tokio::test]
async fn test_fetch_page_non_success_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(403).set_body_string("blocked"))
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::with_config(FetcherConfig::builder().no_pacer().build());
    let body = fetcher
        .fetch_page(&format!("{}/jobs", mock_server.uri()))
        .await;

    assert_eq!(body, None);
}

#[tokio::test]
async fn test_fetch_page_server_error_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::with_config(FetcherConfig::builder().no_pacer().build());
    let body = fetcher
        .fetch_page(&format!("{}/jobs", mock_server.uri()))
        .await;

    assert_eq!(body, None);
}

#[tokio::test]
async fn test_fetch_page_connection_refused_is_absent() {
    let mock_server = MockServer::start().await;
    let dead_url = format!("{}/jobs", mock_server.uri());
    drop(mock_server);

    let fetcher = PageFetcher::with_config(
        FetcherConfig::builder()
            .timeout(Duration::from_secs(2))
            .no_pacer()
            .build(),
    );
    let body = fetcher.fetch_page(&dead_url).await;

    assert_eq!(body, None);
}

#[tokio::test]
async fn test_fetcher_paced_requests_all_succeed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::with_config(
        FetcherConfig::builder().pacer(PacerConfig::new(100, 10)).build(),
    );

    for _ in 0..3 {
        let body = fetcher
            .fetch_page(&format!("{}/jobs", mock_server.uri()))
            .await;
        assert!(body.is_some());
    }
}

#[test]
fn test_fetcher_debug() {
    let fetcher = PageFetcher::new();
    let debug_str = format!("{fetcher:?}");
    assert!(debug_str.contains("PageFetcher"));
    assert!(debug_str.contains("has_pacer"));
}
