//! Typed HTTP client for the admin and search endpoints.

use phaply_core::{AckResponse, ArticleRecord, ArticleSubmission, ErrorDetail, SearchRequest, SearchResponse};
use thiserror::Error;
use tracing::info;

/// Shown when the boundary fails without a structured detail — wrong port,
/// backend down, or a body that is not the expected error shape.
pub const CONNECTIVITY_MESSAGE: &str =
    "Có lỗi xảy ra khi kết nối. Vui lòng kiểm tra lại Backend hoặc API Key.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {}", .detail.as_deref().unwrap_or("(no detail)"))]
    Server {
        status: u16,
        /// The boundary's `detail` field, when the error body carried one.
        detail: Option<String>,
    },
}

impl ClientError {
    /// The message to show an end user: the boundary-provided detail when
    /// present, the generic connectivity message otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}

/// HTTP client for the legal-advisory API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL, e.g. `http://localhost:8000`
    /// (a trailing slash is tolerated).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full catalog listing.
    pub async fn list_articles(&self) -> Result<Vec<ArticleRecord>, ClientError> {
        let url = format!("{}/api/admin/articles", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;
        let articles: Vec<ArticleRecord> = resp.json().await?;
        info!(count = articles.len(), "fetched article listing");
        Ok(articles)
    }

    /// Create or update an article; the server's key lookup decides which.
    pub async fn upsert_article(
        &self,
        submission: &ArticleSubmission,
    ) -> Result<AckResponse, ClientError> {
        let url = format!("{}/api/admin/articles", self.base_url);
        info!(article_num = %submission.article_num, "submitting article");
        let resp = self.client.post(&url).json(submission).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Delete an article by its `article_num`.
    pub async fn delete_article(&self, article_num: &str) -> Result<AckResponse, ClientError> {
        let url = format!("{}/api/admin/articles/{}", self.base_url, article_num);
        info!(article_num, "deleting article");
        let resp = self.client.delete(&url).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Resolve a free-text query against the catalog.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        let url = format!("{}/api/search", self.base_url);
        let body = SearchRequest {
            query: query.to_string(),
        };
        info!(query, "searching");
        let resp = self.client.post(&url).json(&body).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }
}

/// Turn a non-2xx response into [`ClientError::Server`], salvaging the
/// `detail` field when the body parses as the boundary's error shape.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorDetail>(&body)
        .ok()
        .map(|e| e.detail);
    Err(ClientError::Server {
        status: status.as_u16(),
        detail,
    })
}
