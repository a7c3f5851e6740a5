pub mod annotations;
pub mod article;
pub mod draft;
pub mod wire;

pub use annotations::{decode_list, encode_list};
pub use article::{ArticleRecord, ArticleSubmission, KbInfo};
pub use draft::{ArticleDraft, ValidationError};
pub use wire::{AckResponse, ErrorDetail, SearchRequest, SearchResponse};
