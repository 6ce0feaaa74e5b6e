//! Integration tests for the HTTP API
//!
//! These tests drive the router with `tower::ServiceExt::oneshot` and use
//! wiremock as the upstream text server for `/api/clean`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use text_sieve::config::Config;
use text_sieve::server::{create_app, AppState};
use text_sieve::Preprocessor;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOOK: &str = include_str!("../fixtures/pride_and_prejudice_excerpt.txt");

/// Word count of the fixture between its Gutenberg markers
const BOOK_WORD_COUNT: u64 = 100;

fn test_app() -> Router {
    let preprocessor =
        Preprocessor::new(&Config::default()).expect("Failed to create preprocessor");
    create_app(AppState::new(preprocessor), 64 * 1024)
}

/// Sends a request and decodes the JSON response body
async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).expect("Response is not JSON");
    (status, value)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(test_app(), Method::POST, uri, Some(body.to_string())).await
}

/// Starts a mock server serving `body` at `route`
async fn upstream(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_clean_fetches_and_processes_book() {
    let server = upstream(
        "/1342-0.txt",
        ResponseTemplate::new(200)
            .set_body_raw(BOOK, "text/plain; charset=utf-8"),
    )
    .await;

    let url = format!("{}/1342-0.txt", server.uri());
    let (status, body) = post_json("/api/clean", json!({ "url": url })).await;

    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    assert_eq!(body["success"], true);

    let cleaned = body["cleaned_text"].as_str().expect("cleaned_text missing");
    assert!(cleaned.starts_with("Chapter 1 It is a truth universally acknowledged"));
    assert!(cleaned.ends_with("Mr. Bennet replied that he had not."));
    assert!(!cleaned.contains("PROJECT GUTENBERG"));
    assert!(!cleaned.contains('\n'));

    assert_eq!(body["statistics"]["word_count"], BOOK_WORD_COUNT);
    assert_eq!(body["statistics"]["sentence_count"], 4);

    let summary = body["summary"].as_array().expect("summary missing");
    assert!(!summary.is_empty() && summary.len() <= 3);
    for sentence in summary {
        assert!(cleaned.contains(sentence.as_str().unwrap()));
    }
}

#[tokio::test]
async fn test_clean_rejects_non_txt_url() {
    let (status, body) = post_json(
        "/api/clean",
        json!({ "url": "https://example.com/file.pdf" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains(".txt"));
}

#[tokio::test]
async fn test_clean_requires_url() {
    let (status, body) = post_json("/api/clean", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "No URL provided in request" })
    );
}

#[tokio::test]
async fn test_clean_blank_url_counts_as_missing() {
    let (status, body) = post_json("/api/clean", json!({ "url": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "No URL provided in request" })
    );
}

#[tokio::test]
async fn test_clean_requires_body() {
    let (status, body) = send(test_app(), Method::POST, "/api/clean", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "No JSON data provided" })
    );
}

#[tokio::test]
async fn test_clean_upstream_not_found() {
    let server = upstream("/other.txt", ResponseTemplate::new(200)).await;

    let url = format!("{}/missing.txt", server.uri());
    let (status, body) = post_json("/api/clean", json!({ "url": url })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Server error:"));
    assert!(error.contains("404"));
    assert!(body.get("statistics").is_none());
}

#[tokio::test]
async fn test_clean_upstream_not_text() {
    let server = upstream(
        "/book.txt",
        ResponseTemplate::new(200)
            .set_body_raw(vec![0x89, 0x50, 0x4e, 0x47], "image/png"),
    )
    .await;

    let url = format!("{}/book.txt", server.uri());
    let (status, body) = post_json("/api/clean", json!({ "url": url })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not text"));
}

#[tokio::test]
async fn test_clean_text_without_markers_is_kept() {
    let server = upstream(
        "/notes.txt",
        ResponseTemplate::new(200)
            .set_body_raw("Plain notes.\nNo boilerplate here!", "text/plain"),
    )
    .await;

    let url = format!("{}/notes.txt", server.uri());
    let (status, body) = post_json("/api/clean", json!({ "url": url })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaned_text"], "Plain notes. No boilerplate here!");
    assert_eq!(body["summary"], json!(["Plain notes.", "No boilerplate here!"]));
}

#[tokio::test]
async fn test_analyze_counts_words_and_sentences() {
    let (status, body) = post_json(
        "/api/analyze",
        json!({ "text": "Hello world. Goodbye world!" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["statistics"]["word_count"], 4);
    assert_eq!(body["statistics"]["sentence_count"], 2);
    assert!(body.get("summary").is_none());
    assert!(body.get("cleaned_text").is_none());
}

#[tokio::test]
async fn test_analyze_uses_raw_text() {
    let (status, body) = post_json("/api/analyze", json!({ "text": "a  b\n" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statistics"]["character_count"], 5);
    assert_eq!(body["statistics"]["word_count"], 2);
}

#[tokio::test]
async fn test_analyze_requires_text() {
    let (status, body) = post_json("/api/analyze", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("text"));
}

#[tokio::test]
async fn test_analyze_rejects_invalid_json() {
    let (status, body) = send(
        test_app(),
        Method::POST,
        "/api/analyze",
        Some("{not json".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No JSON data provided");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let text = "word ".repeat(20_000);
    let (status, body) = post_json("/api/analyze", json!({ "text": text })).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (status, body) = send(test_app(), Method::GET, "/nonexistent", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Endpoint not found" })
    );
}

#[tokio::test]
async fn test_wrong_method_returns_405() {
    let (status, body) = send(test_app(), Method::GET, "/api/clean", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Method not allowed" })
    );
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(test_app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "healthy", "message": "Text preprocessing service is running" })
    );
}

#[tokio::test]
async fn test_index_serves_form() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = test_app().oneshot(request).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let html = String::from_utf8(bytes.to_vec()).expect("HTML is not UTF-8");
    assert!(html.contains("/api/clean"));
}
