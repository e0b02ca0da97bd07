//! Router-level tests for the litbot HTTP API

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use litbot::config::LitbotConfig;
use litbot::server::{build_router, state::AppState};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tower::ServiceExt;

const NOVEL: &str = "나는 마들렌을 먹었다.\n그리고 또 하나의 나를 만났다.";
const BOUNDARY: &str = "litbot-test-boundary";

fn test_app(dir: &Path) -> Router {
    let corpus_path = dir.join("novel.txt");
    fs::write(&corpus_path, NOVEL).unwrap();

    let mut config = LitbotConfig::default();
    config.storage.corpus_path = corpus_path;
    config.storage.log_path = dir.join("chat_log.txt");
    config.storage.reflection_path = dir.join("reflection.txt");

    build_router(AppState::new(config).unwrap())
}

fn upload_request(uri: &str, filename: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn ask_request(question: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "question": question }).to_string(),
        ))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_and_page() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let response = app.clone().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("감상문 업로드"));
}

#[tokio::test]
async fn test_ask_before_upload_asks_for_review() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, body) = send(&app, ask_request("주인공은 누구야?")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["type"], "review_missing");

    let (status, _) = send(&app, get_request("/api/review")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_review_upload_then_ask_appends_log() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (bytes, _, _) = encoding_rs::EUC_KR.encode("마들렌 장면이 좋았다");
    let (status, body) = send(&app, upload_request("/api/review", "my review.txt", &bytes)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "마들렌 장면이 좋았다");
    assert_eq!(body["format"], "plain-text");
    assert_eq!(body["format_name"], "텍스트 파일 (.txt)");
    let stored_as = body["stored_as"].as_str().unwrap();
    assert!(stored_as.starts_with("my_review_") && stored_as.ends_with(".txt"));

    let (status, body) = send(&app, get_request("/api/review")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_name"], "my review.txt");

    let (status, body) = send(&app, ask_request("Q1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "Q1");
    assert!(body.get("log_warning").is_none());
    let response = body["response"].as_str().unwrap().to_string();

    send(&app, ask_request("Q2")).await;

    let log = fs::read_to_string(dir.path().join("chat_log.txt")).unwrap();
    let q1 = log.find("You: Q1\n").unwrap();
    let q2 = log.find("You: Q2\n").unwrap();
    assert!(q1 < q2);
    assert!(log.contains(&format!("Claude: {}\n\n", response)));
}

#[tokio::test]
async fn test_reflection_upload_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, _) = send(
        &app,
        upload_request("/api/reflection", "journal.txt", "오늘의 성찰".as_bytes()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        upload_request("/api/reflection", "journal.txt", "다시 쓴 성찰".as_bytes()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "다시 쓴 성찰");

    assert_eq!(
        fs::read_to_string(dir.path().join("reflection.txt")).unwrap(),
        "다시 쓴 성찰"
    );
}

#[tokio::test]
async fn test_malformed_docx_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, body) = send(&app, upload_request("/api/review", "essay.docx", b"PK-not-really")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "parse_error");
}

#[tokio::test]
async fn test_upload_without_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/review")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_upload");
}

#[tokio::test]
async fn test_corpus_excerpt_paging() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, body) = send(&app, get_request("/api/corpus?offset=0&limit=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "나는 마들");
    assert_eq!(body["next_offset"], 5);
    assert_eq!(body["total_chars"], NOVEL.chars().count());

    let (_, body) = send(&app, get_request("/api/corpus?offset=5")).await;
    assert_eq!(body["text"], NOVEL.chars().skip(5).collect::<String>());
    assert!(body.get("next_offset").is_none());
}
