mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_creates_mapping() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com/page" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let code = body["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 7);
    assert_eq!(body["originalUrl"], "https://example.com/page");
    assert_eq!(body["shortUrl"], format!("{}/{}", common::BASE_URL, code));
}

#[tokio::test]
async fn test_shorten_same_url_returns_existing_code() {
    let server = common::create_test_server();
    let payload = json!({ "originalUrl": "https://example.com/same" });

    let first = server.post("/api/shorten").json(&payload).await;
    let second = server.post("/api/shorten").json(&payload).await;

    assert_eq!(first.status_code(), 201);
    assert_eq!(second.status_code(), 200);

    let first: Value = first.json();
    let second: Value = second.json();
    assert_eq!(first["shortCode"], second["shortCode"]);
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_codes() {
    let server = common::create_test_server();

    let a: Value = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "http://x.com" }))
        .await
        .json();
    let b: Value = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "http://x.com/" }))
        .await
        .json();

    assert_ne!(a["shortCode"], b["shortCode"]);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = common::create_test_server();

    let response = server.post("/api/shorten").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "URL is required");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "URL is required");
}

#[tokio::test]
async fn test_shorten_malformed_url() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Invalid URL format");
    assert_eq!(body["error"]["details"]["field"], "originalUrl");
}

#[tokio::test]
async fn test_shorten_rejected_url_creates_nothing() {
    let state = common::create_test_state();
    let server = axum_test::TestServer::new(common::create_test_app(state.clone())).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "/relative/path" }))
        .await
        .assert_status_bad_request();

    assert_eq!(state.shortener.store().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_characters_outside_uri_set() {
    let state = common::create_test_state();
    let server = axum_test::TestServer::new(common::create_test_app(state.clone())).unwrap();

    for input in [
        "https://example.com/a\nb",
        "http://example.com/\u{7f}",
        " https://example.com/x ",
        "https://example.com/a b",
    ] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "originalUrl": input }))
            .await;

        assert_eq!(response.status_code(), 400, "{input:?} should be rejected");
        let body: Value = response.json();
        assert_eq!(body["error"]["message"], "Invalid URL format");
    }

    assert_eq!(state.shortener.store().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_percent_encoded_url_redirects_unchanged() {
    let server = common::create_test_server();

    let created: Value = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com/a%20b?q=caf%C3%A9" }))
        .await
        .json();
    let code = created["shortCode"].as_str().unwrap();

    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://example.com/a%20b?q=caf%C3%A9"
    );
}

#[tokio::test]
async fn test_shorten_accepts_form_body() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .form(&[("originalUrl", "https://example.com/form")])
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["originalUrl"], "https://example.com/form");

    let again = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com/form" }))
        .await;

    assert_eq!(again.status_code(), 200);
    let again: Value = again.json();
    assert_eq!(again["shortCode"], body["shortCode"]);
}

#[tokio::test]
async fn test_shorten_form_without_url() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .form(&[("somethingElse", "1")])
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "URL is required");
}

#[tokio::test]
async fn test_shorten_unreadable_body_uses_error_format() {
    let server = common::create_test_server();

    let wrong_type = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": 42 }))
        .await;
    let broken_json = server
        .post("/api/shorten")
        .bytes("{\"originalUrl\":".into())
        .content_type("application/json")
        .await;
    let plain_text = server
        .post("/api/shorten")
        .text("https://example.com")
        .await;

    for response in [wrong_type, broken_json, plain_text] {
        assert_eq!(response.status_code(), 400);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "validation_error");
        assert_eq!(body["error"]["message"], "Invalid request body");
        assert!(body["error"]["details"]["reason"].is_string());
    }
}
