//! Client side of the legal-advisory boundary: a typed HTTP client plus the
//! two session objects a frontend drives — [`CatalogSession`] for catalog
//! administration and [`QuerySession`] for end-user search.

pub mod catalog;
pub mod http;
pub mod query;

pub use catalog::{CatalogSession, RemoveOutcome, StatusKind, StatusLine, SubmitOutcome};
pub use http::{ApiClient, ClientError};
pub use query::{AnnotationPanel, FoundResult, QuerySession, QueryState, ResultTab};
