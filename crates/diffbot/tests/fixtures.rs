// ABOUTME: Fixture tests decoding captured Diffbot Article API responses.
// ABOUTME: Covers a full extraction result, its round-trip and an error envelope served over HTTP.

use diffbot::{Article, Client, Model, PageType, QueryValue};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;

/// Load a fixture file from the fixtures directory.
fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
}

#[test]
fn decodes_full_article_fixture() {
    let article = Article::from_json(&load_fixture("article")).expect("fixture should decode");

    assert_eq!(article.page_type(), Some(PageType::Article));
    assert_eq!(article.url(), Some("http://bit.ly/diffbot-product"));
    assert_eq!(
        article.resolved_url(),
        Some("http://www.example.com/2013/07/31/diffbot-product-api/")
    );
    assert_eq!(article.author(), Some("John Constine"));
    assert_eq!(article.human_language(), Some("en"));
    assert_eq!(article.num_pages(), Some(1));
    assert_eq!(article.tags().len(), 3);

    let images = article.images().expect("images");
    assert_eq!(images.len(), 2);
    assert!(images[0].is_primary());
    assert!(!images[1].is_primary());
    assert_eq!(images[1].caption(), None);

    assert_eq!(article.videos().map(|v| v.len()), Some(1));
    assert_eq!(article.categories().and_then(|c| c.top()), Some(("technology", 0.93)));

    let meta = article.meta().expect("meta");
    assert_eq!(meta.get_str("description"), Some("Robots that shop."));
    assert_eq!(
        meta.twitter().and_then(|t| t.get("twitter:site")),
        Some(&serde_json::json!("@diffbot"))
    );

    let qs = article.querystring().expect("querystring");
    assert_eq!(qs.get("amp"), Some(&QueryValue::Flag(true)));
    assert_eq!(qs.get("utm_source").and_then(QueryValue::as_str), Some("twitter"));

    assert_eq!(article.comments().map(|c| c.count()), Some(17));
    assert_eq!(article.to_string(), "Article [url=http://bit.ly/diffbot-product]");
}

#[test]
fn fixture_round_trips_without_unmodelled_keys() {
    let article = Article::from_json(&load_fixture("article")).unwrap();
    let encoded = article.to_json().unwrap();

    assert!(!encoded.contains("diffbotUri"));
    assert!(!encoded.contains("fetchTime"));
    assert_eq!(Article::from_json(&encoded).unwrap(), article);
}

#[tokio::test]
async fn serves_error_fixture_as_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/article");
        then.status(200)
            .header("content-type", "application/json")
            .body(load_fixture("error"));
    });

    let client = Client::builder()
        .token("tok")
        .api_base(server.base_url())
        .build()
        .unwrap();
    let err = client
        .analyze("http://www.example.com/missing")
        .send()
        .await
        .expect_err("should fail");

    assert!(err.is_api());
    assert_eq!(err.status, Some(500));
    assert!(err.to_string().contains("Could not download page (404)"));
}
