mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::{health_handler, hello_handler};

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    state
        .short_urls
        .shorten("https://example.com")
        .await
        .unwrap();
    state
        .short_urls
        .shorten("https://example.org")
        .await
        .unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["registry"]["status"], "ok");
    assert_eq!(
        json["checks"]["registry"]["message"],
        "2 short URLs registered"
    );
}

#[tokio::test]
async fn test_hello_endpoint() {
    let app = Router::new().route("/api/hello", get(hello_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "greeting": "hello API" }));
}
