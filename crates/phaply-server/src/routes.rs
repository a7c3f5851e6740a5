//! Route handlers for the admin and search endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use phaply_ai::{AiError, GeminiClient, advisor, retrieval};
use phaply_core::{AckResponse, ArticleRecord, ArticleSubmission, ErrorDetail, SearchRequest, SearchResponse};
use phaply_store::{ArticleCatalog, StoreError};
use tokio::sync::RwLock;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<ArticleCatalog>>,
    pub ai: Arc<GeminiClient>,
}

/// Build the application router with permissive CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/admin/articles", get(list_articles).post(upsert_article))
        .route("/api/admin/articles/{article_num}", axum::routing::delete(delete_article))
        .route("/api/search", post(search))
        .layer(cors)
        .with_state(state)
}

// ── Error response ──

/// Handler error carrying the HTTP status and the `detail` message clients parse.
struct AppError {
    status: StatusCode,
    detail: String,
}

impl AppError {
    fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, detail = %self.detail, "request failed");
        let body = ErrorDetail {
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal(err.to_string())
    }
}

// ── GET /api/admin/articles ──

async fn list_articles(State(state): State<AppState>) -> Json<Vec<ArticleRecord>> {
    let catalog = state.catalog.read().await;
    Json(catalog.list())
}

// ── POST /api/admin/articles ──

async fn upsert_article(
    State(state): State<AppState>,
    Json(submission): Json<ArticleSubmission>,
) -> Result<Json<AckResponse>, AppError> {
    // Regenerate the content embedding before taking the write lock.
    let embedding = state.ai.embed(&submission.content).await?;

    let article_num = submission.article_num.clone();
    let mut catalog = state.catalog.write().await;
    catalog.upsert(submission, embedding)?;
    info!(%article_num, total = catalog.len(), "article saved");

    Ok(Json(AckResponse {
        status: "success".into(),
        message: "Saved successfully!".into(),
    }))
}

// ── DELETE /api/admin/articles/{article_num} ──

async fn delete_article(
    State(state): State<AppState>,
    Path(article_num): Path<String>,
) -> Result<Json<AckResponse>, AppError> {
    let mut catalog = state.catalog.write().await;
    catalog.remove(&article_num)?;

    Ok(Json(AckResponse {
        status: "success".into(),
        message: "Deleted successfully.".into(),
    }))
}

// ── POST /api/search ──

const NOT_FOUND_MESSAGE: &str = "Không tìm thấy điều luật phù hợp trong cơ sở dữ liệu.";

async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let query_vec = state.ai.embed(&req.query).await?;

    // Resolve the best-matching article under a read lock; clone what the
    // prompt needs so the lock is not held across the generation call.
    let matched = {
        let catalog = state.catalog.read().await;
        retrieval::best_match(&query_vec, catalog.embeddings(), retrieval::MATCH_THRESHOLD)
            .map(|(key, score)| (key.to_string(), score))
            .and_then(|(key, score)| catalog.get(&key).cloned().map(|a| (a, score)))
    };

    let Some((article, score)) = matched else {
        info!(query = %req.query, "no article above threshold");
        return Ok(Json(SearchResponse {
            found: false,
            message: Some(NOT_FOUND_MESSAGE.into()),
            ..Default::default()
        }));
    };

    info!(article_num = %article.article_num, score, "matched article");
    let prompt = advisor::advice_prompt(&article.content, &article.kb.practical_risks, &req.query);
    let ai_response = state.ai.generate(&prompt).await?;

    Ok(Json(SearchResponse {
        found: true,
        message: None,
        law_id: Some(article.law_id),
        article_num: Some(article.article_num),
        content: Some(article.content),
        conflicts: article.kb.conflicts,
        practical_risks: article.kb.practical_risks,
        related_decrees: article.kb.related_decrees,
        ai_response: Some(ai_response),
    }))
}
