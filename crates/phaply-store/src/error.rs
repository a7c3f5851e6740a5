use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog file parse failed: {0}")]
    Json(#[from] serde_json::Error),
}
