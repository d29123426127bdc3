//! End-to-end tests against a running storefront-support server.
//!
//! Requires the server to be up with the seed data under `data/`:
//!   cargo run &
//!   cargo test --test e2e_test -- --ignored

use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

async fn post_query(client: &reqwest::Client, message: &str) -> reqwest::Response {
    client
        .post(format!("{}/chatbot/query", base_url()))
        .json(&json!({ "message": message }))
        .send()
        .await
        .expect("request failed")
}

#[tokio::test]
#[ignore] // Run with: cargo test --test e2e_test -- --ignored
async fn test_health_endpoint() {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("invalid JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["checks"]["products"]["status"], "ok");
    assert_eq!(body["checks"]["orders"]["status"], "ok");
}

#[tokio::test]
#[ignore]
async fn test_chatbot_order_status_flow() {
    let client = reqwest::Client::new();
    let response = post_query(&client, "What's the status of order 12345?").await;

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("invalid JSON");
    assert_eq!(body["type"], "order_status");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["orderId"], "12345");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_chatbot_rejects_blank_message() {
    let client = reqwest::Client::new();
    let response = post_query(&client, "   ").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/chatbot/query", base_url()))
        .json(&json!({ "message": 42 }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_chatbot_unknown_query() {
    let client = reqwest::Client::new();
    let response = post_query(&client, "zzzzz nonsense").await;

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("invalid JSON");
    assert_eq!(body["type"], "unknown");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore]
async fn test_product_endpoints() {
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{}/products", base_url()))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON");
    assert_eq!(body["success"], true);
    assert!(body["count"].as_u64().unwrap() > 0);

    let body: Value = client
        .get(format!("{}/products/top/3", base_url()))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON");
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let response = client
        .get(format!("{}/products/NOPE", base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_order_tracking_endpoint() {
    let client = reqwest::Client::new();
    let body: Value = client
        .get(format!("{}/orders/12345/track", base_url()))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON");

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["orderId"], "12345");
    assert!(body["data"]["statusMessage"]
        .as_str()
        .unwrap()
        .contains("shipped"));
}

#[tokio::test]
#[ignore]
async fn test_suggestions_endpoint() {
    let client = reqwest::Client::new();
    let body: Value = client
        .get(format!("{}/chatbot/suggestions", base_url()))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON");

    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}
