//! AI inference layer: Gemini API clients for embeddings and generation,
//! plus the retrieval math and advisory prompt the search path runs on.

pub mod advisor;
mod gemini;
pub mod retrieval;

pub use gemini::{AiError, GeminiClient};
