//! Integration tests for `FetchClient::extract_url`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made. Covers the happy path end to end plus the
//! degraded records produced by HTTP errors and unreachable hosts.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use briefkit_core::AppConfig;
use briefkit_extract::{FetchClient, SourceExtraction};

/// Builds a `FetchClient` suitable for tests: 5-second timeout, descriptive UA.
fn test_client() -> FetchClient {
    let config = AppConfig {
        log_level: "info".to_string(),
        fetch_timeout_secs: 5,
        user_agent: "briefkit-test/0.1".to_string(),
        raw_text_max_chars: 5000,
    };
    FetchClient::new(&config).expect("failed to build test FetchClient")
}

const LANDING_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Acme Billing | Acme Ltd</title>
  <meta name="description" content="Invoicing that runs itself.">
</head>
<body>
  <h1>Stop chasing invoices</h1>
  <ul>
    <li>Automatic payment reminders</li>
    <li>Reconciliation in one click</li>
  </ul>
  <a href="/signup">Sign up</a>
</body>
</html>"#;

#[tokio::test]
async fn extract_url_returns_structured_record_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LANDING_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let SourceExtraction { content, error } = test_client().extract_url(&server.uri()).await;

    assert!(error.is_none());
    assert_eq!(content.value_proposition.headline, "Stop chasing invoices");
    assert_eq!(content.value_proposition.subheadline, "Invoicing that runs itself.");
    assert_eq!(content.product.name, "Acme Billing");
    assert_eq!(
        content.value_proposition.key_benefits,
        vec![
            "Automatic payment reminders".to_string(),
            "Reconciliation in one click".to_string(),
        ]
    );
}

#[tokio::test]
async fn http_error_produces_degraded_record_not_a_panic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let SourceExtraction { content, error } = test_client().extract_url(&server.uri()).await;

    assert!(error.is_some());
    assert!(content.raw_text.starts_with("Error fetching URL:"));
    assert!(content.raw_text.contains("503"));
    assert!(content.value_proposition.headline.is_empty());
    assert!(content.is_empty());
}

#[tokio::test]
async fn unreachable_host_produces_degraded_record() {
    // Port 1 on localhost refuses connections immediately.
    let SourceExtraction { content, error } =
        test_client().extract_url("http://127.0.0.1:1/").await;

    assert!(error.is_some());
    assert!(content.raw_text.starts_with("Error fetching URL:"));
}

#[tokio::test]
async fn bare_domain_gets_https_scheme_in_source_id() {
    // No server listens; we only care that the recorded source carries the
    // normalized URL.
    let SourceExtraction { content, error } =
        test_client().extract_url("127.0.0.1:1").await;

    assert!(error.is_some());
    assert_eq!(content.source, "https://127.0.0.1:1");
}
