//! Storage layer: the authoritative article catalog behind the admin and search endpoints.

mod catalog;
mod error;

pub use catalog::{ArticleCatalog, StoredArticle};
pub use error::StoreError;
