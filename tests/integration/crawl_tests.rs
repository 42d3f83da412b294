//! Integration tests for the crawler
//!
//! These tests use wiremock to serve recommendation pages and run the full
//! crawl cycle end-to-end, including the output file.

use shelfwalk::config::Config;
use shelfwalk::crawler::run_crawl;
use shelfwalk::ShelfError;
use std::path::Path;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ID_PREFIX: &str = "ProductGridImageWrapper-product-recommendations--";

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, seed: &str, output_path: &Path) -> Config {
    let mut config = Config::default();
    config.seed.product_id = seed.to_string();
    config.site.origin = base_url.to_string();
    config.site.recommendation_url_template = format!(
        "{}/recommendations/products?&section_id=product-recommendations&product_id={{id}}",
        base_url
    );
    config.user_agent.crawler_name = "TestBot".to_string();
    config.user_agent.crawler_version = "1.0.0".to_string();
    config.http.request_timeout_secs = 5;
    config.output.html_path = output_path.display().to_string();
    config
}

/// One product card in the shop's markup
fn card(id: &str, title: &str, price: &str) -> String {
    format!(
        r#"<div class="box product">
            <a class="product_card" href="/products/{id}" id="{ID_PREFIX}{id}">
                <img class="product_card__image" data-fallback="//cdn.test/{id}.jpg" alt="{title}" src="placeholder.gif">
            </a>
            <div class="meta"><span class="price">
                {price}
            </span></div>
        </div>"#
    )
}

fn page(cards: &[String]) -> String {
    format!(
        "<html><body><div class=\"product-recommendations\">{}</div></body></html>",
        cards.concat()
    )
}

/// Mounts a recommendation page for one product, expected to be fetched once
async fn mount_page(server: &MockServer, product_id: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/recommendations/products"))
        .and(query_param("product_id", product_id))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_seed_page_with_malformed_card() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("index.html");

    let malformed = r#"<div class="box product">
            <a class="product_card" href="/products/x" id="ProductGridImageWrapper--not-a-number"></a>
            <span class="price">$1.00</span>
        </div>"#
        .to_string();
    mount_page(&mock_server, "1", page(&[card("2", "Widget", "$5.00"), malformed])).await;
    mount_page(&mock_server, "2", page(&[])).await;

    let config = create_test_config(&base_url, "1", &output_path);
    let report = run_crawl(&config, None).await.expect("Crawl failed");

    assert_eq!(report.pages_fetched, 2);
    assert_eq!(report.unique_products, 1);
    assert_eq!(report.cards_skipped, 1);

    let written = std::fs::read_to_string(&output_path).expect("Output not written");
    let expected = format!(
        "<div class=\"product\">\n\
         \t<a href=\"{base}/products/2\">\n\
         \t\t<img src=\"https://cdn.test/2.jpg\" alt=\"Widget\"/>\n\
         \t</a>\n\
         \t<h2>Widget</h2>\n\
         \t<p class=\"price\">$5.00</p>\n\
         </div>\n",
        base = base_url
    );
    assert_eq!(written, expected);

    // Wiremock verifies the expect(1) counts when mock_server drops
}

#[tokio::test]
async fn test_cyclic_recommendations_visit_each_page_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("index.html");

    // 1 -> {2, 3}; 2 -> {1, 3}; 3 -> {2}
    mount_page(
        &mock_server,
        "1",
        page(&[card("2", "Two", "$2"), card("3", "Three", "$3")]),
    )
    .await;
    mount_page(
        &mock_server,
        "2",
        page(&[card("1", "One", "$1"), card("3", "Three", "$3")]),
    )
    .await;
    mount_page(&mock_server, "3", page(&[card("2", "Two", "$2")])).await;

    let config = create_test_config(&base_url, "1", &output_path);
    let report = run_crawl(&config, Some("hash".to_string()))
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages_fetched, 3);
    assert_eq!(report.unique_products, 3);
    assert_eq!(report.products_extracted, 5);
    assert_eq!(report.config_hash.as_deref(), Some("hash"));

    let written = std::fs::read_to_string(&output_path).expect("Output not written");
    let headings: Vec<&str> = written
        .lines()
        .filter(|line| line.trim_start().starts_with("<h2>"))
        .map(str::trim)
        .collect();
    // Sorted by product id
    assert_eq!(headings, vec!["<h2>One</h2>", "<h2>Two</h2>", "<h2>Three</h2>"]);
}

#[tokio::test]
async fn test_non_200_status_aborts_without_output() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("index.html");

    mount_page(&mock_server, "1", page(&[card("2", "Two", "$2")])).await;

    Mock::given(method("GET"))
        .and(path("/recommendations/products"))
        .and(query_param("product_id", "2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, "1", &output_path);
    let result = run_crawl(&config, None).await;

    match result {
        Err(ShelfError::Status { url, status }) => {
            assert_eq!(status, 503);
            assert!(url.ends_with("product_id=2"), "unexpected url {}", url);
        }
        other => panic!("Expected status error, got {:?}", other.map(|r| r.pages_fetched)),
    }
    assert!(!output_path.exists(), "No output may be written on failure");
}

#[tokio::test]
async fn test_non_200_success_status_aborts() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("index.html");

    // 204 is a success class status but not 200, so the crawl must stop
    Mock::given(method("GET"))
        .and(path("/recommendations/products"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, "1", &output_path);
    let result = run_crawl(&config, None).await;

    assert!(matches!(result, Err(ShelfError::Status { status: 204, .. })));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("index.html");

    Mock::given(method("GET"))
        .and(path("/recommendations/products"))
        .and(header(
            "user-agent",
            "TestBot/1.0.0 (+https://example.com/shelfwalk; crawler@example.com)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, "1", &output_path);
    let report = run_crawl(&config, None).await.expect("Crawl failed");

    assert_eq!(report.unique_products, 0);
    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "");
}

#[tokio::test]
async fn test_escape_setting_controls_rendering() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    Mock::given(method("GET"))
        .and(path("/recommendations/products"))
        .and(query_param("product_id", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page(&[card("5", "Fish &amp; Chips", "$4")])),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recommendations/products"))
        .and(query_param("product_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(&[])))
        .mount(&mock_server)
        .await;

    // Fields are written verbatim unless escaping is switched on
    let raw_path = dir.path().join("raw.html");
    let config = create_test_config(&base_url, "1", &raw_path);
    run_crawl(&config, None).await.expect("Crawl failed");
    let raw = std::fs::read_to_string(&raw_path).unwrap();
    assert!(raw.contains("<h2>Fish & Chips</h2>"));

    let escaped_path = dir.path().join("escaped.html");
    let mut config = create_test_config(&base_url, "1", &escaped_path);
    config.output.escape_html = true;
    run_crawl(&config, None).await.expect("Crawl failed");
    let escaped = std::fs::read_to_string(&escaped_path).unwrap();
    assert!(escaped.contains("<h2>Fish &amp; Chips</h2>"));
}
