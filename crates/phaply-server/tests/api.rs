//! End-to-end tests for the HTTP boundary, with Gemini mocked.

use std::sync::Arc;

use phaply_ai::GeminiClient;
use phaply_core::{AckResponse, ArticleRecord, ErrorDetail, SearchResponse};
use phaply_server::{AppState, router};
use phaply_store::ArticleCatalog;
use serde_json::json;
use tokio::sync::RwLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bind the app on an ephemeral port, pointing its Gemini client at `gemini_url`.
async fn spawn_app(gemini_url: String) -> String {
    let state = AppState {
        catalog: Arc::new(RwLock::new(ArticleCatalog::open())),
        ai: Arc::new(GeminiClient::with_base_url("test-key".into(), gemini_url)),
    };
    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn mock_embed(server: &MockServer, values: &[f32]) {
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-embedding-001:embedContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embedding": { "values": values }
        })))
        .mount(server)
        .await;
}

async fn mock_generate(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-flash-latest:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })))
        .mount(server)
        .await;
}

fn submission_body(article_num: &str, content: &str) -> serde_json::Value {
    json!({
        "law_id": "Luật Đất đai 2024",
        "article_num": article_num,
        "content": content,
        "conflicts": [],
        "practical_risks": ["Rủi ro A"],
        "related_decrees": []
    })
}

#[tokio::test]
async fn upsert_then_list_reflects_update_without_duplicates() {
    let gemini = MockServer::start().await;
    mock_embed(&gemini, &[1.0, 0.0]).await;
    let base = spawn_app(gemini.uri()).await;
    let http = reqwest::Client::new();

    let ack: AckResponse = http
        .post(format!("{base}/api/admin/articles"))
        .json(&submission_body("Điều 10", "bản gốc"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ack.status, "success");

    // Same key again with new content: update, not a second row.
    http.post(format!("{base}/api/admin/articles"))
        .json(&submission_body("Điều 10", "đã sửa"))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let listing: Vec<ArticleRecord> = http
        .get(format!("{base}/api/admin/articles"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].content, "đã sửa");
    assert_eq!(
        listing[0].kb_info.as_ref().unwrap().practical_risks,
        vec!["Rủi ro A"]
    );
}

#[tokio::test]
async fn delete_removes_key_from_listing() {
    let gemini = MockServer::start().await;
    mock_embed(&gemini, &[1.0, 0.0]).await;
    let base = spawn_app(gemini.uri()).await;
    let http = reqwest::Client::new();

    http.post(format!("{base}/api/admin/articles"))
        .json(&submission_body("Điều 10", "x"))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let ack: AckResponse = http
        .delete(format!("{base}/api/admin/articles/Điều 10"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ack.message, "Deleted successfully.");

    let listing: Vec<ArticleRecord> = http
        .get(format!("{base}/api/admin/articles"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listing.is_empty());
}

#[tokio::test]
async fn search_returns_match_with_ai_response() {
    let gemini = MockServer::start().await;
    mock_embed(&gemini, &[1.0, 0.0]).await;
    mock_generate(&gemini, "Nên công chứng hợp đồng trước khi đặt cọc.").await;
    let base = spawn_app(gemini.uri()).await;
    let http = reqwest::Client::new();

    http.post(format!("{base}/api/admin/articles"))
        .json(&submission_body("Điều 127", "Điều kiện chuyển nhượng."))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let result: SearchResponse = http
        .post(format!("{base}/api/search"))
        .json(&json!({ "query": "thủ tục bán đất" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(result.found);
    assert_eq!(result.article_num.as_deref(), Some("Điều 127"));
    assert_eq!(result.practical_risks, vec!["Rủi ro A"]);
    assert_eq!(
        result.ai_response.as_deref(),
        Some("Nên công chứng hợp đồng trước khi đặt cọc.")
    );
    assert!(result.message.is_none());
}

#[tokio::test]
async fn search_empty_catalog_is_not_found_not_error() {
    let gemini = MockServer::start().await;
    mock_embed(&gemini, &[1.0, 0.0]).await;
    let base = spawn_app(gemini.uri()).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/search"))
        .json(&json!({ "query": "một câu hỏi bất kỳ" }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let result: SearchResponse = resp.json().await.unwrap();
    assert!(!result.found);
    assert_eq!(
        result.message.as_deref(),
        Some("Không tìm thấy điều luật phù hợp trong cơ sở dữ liệu.")
    );
    assert!(result.article_num.is_none());
    assert!(result.ai_response.is_none());
}

#[tokio::test]
async fn embedding_failure_surfaces_detail() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key invalid"))
        .mount(&gemini)
        .await;
    let base = spawn_app(gemini.uri()).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/search"))
        .json(&json!({ "query": "câu hỏi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 500);

    let err: ErrorDetail = resp.json().await.unwrap();
    assert!(err.detail.contains("403"), "detail was: {}", err.detail);
}
