mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_check() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["store"]["message"], "Connected, 0 mappings");
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "TinyURL API is running");
    assert_eq!(body["endpoints"]["shorten"], "POST /api/shorten");
    assert_eq!(body["endpoints"]["redirect"], "GET /:shortCode");
}
