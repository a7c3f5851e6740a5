//! HTTP boundary for the legal-advisory service.
//!
//! Exposes the catalog administration endpoints and the free-text search
//! endpoint over JSON:
//!
//! | Method   | Path | Description |
//! |----------|------|-------------|
//! | `GET`    | `/api/admin/articles` | Full catalog listing |
//! | `POST`   | `/api/admin/articles` | Create-or-update an article (the key lookup decides which) |
//! | `DELETE` | `/api/admin/articles/{article_num}` | Delete by key |
//! | `POST`   | `/api/search` | Resolve a free-text query to an article plus an AI explanation |
//!
//! Every non-2xx response carries `{ "detail": "..." }`. CORS is wide open —
//! the browser frontend runs on a different port.

mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use phaply_ai::GeminiClient;
use phaply_store::ArticleCatalog;
use tokio::sync::RwLock;
use tracing::info;

pub use routes::{AppState, router};

/// Server configuration, normally assembled by the CLI.
pub struct ServerConfig {
    /// Bind address, e.g. `127.0.0.1:8000`.
    pub bind: String,
    /// Catalog file path; `None` runs an ephemeral in-memory catalog.
    pub catalog_path: Option<PathBuf>,
    /// Gemini API key.
    pub api_key: String,
    /// Override for the Gemini base URL (tests point this at a mock).
    pub gemini_base_url: Option<String>,
}

/// Run the boundary until the process is terminated.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let catalog = match &config.catalog_path {
        Some(path) => ArticleCatalog::open_persistent(path)?,
        None => ArticleCatalog::open(),
    };
    info!(articles = catalog.len(), "catalog ready");

    let ai = match config.gemini_base_url {
        Some(base) => GeminiClient::with_base_url(config.api_key, base),
        None => GeminiClient::new(config.api_key),
    };

    let state = AppState {
        catalog: Arc::new(RwLock::new(catalog)),
        ai: Arc::new(ai),
    };

    let app = router(state);

    info!(bind = %config.bind, "legal advisor API listening");
    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
