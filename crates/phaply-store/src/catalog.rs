//! Ordered article catalog with upsert-by-key semantics.

use std::fs;
use std::path::{Path, PathBuf};

use phaply_core::{ArticleRecord, ArticleSubmission, KbInfo};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::StoreError;

/// One catalog entry: the article, its knowledge base, and the content
/// embedding used by retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredArticle {
    pub law_id: String,
    pub article_num: String,
    pub content: String,
    #[serde(default)]
    pub kb: KbInfo,
    /// Embedding of `content`, regenerated on every upsert.
    #[serde(default)]
    pub embedding: Vec<f32>,
}

impl StoredArticle {
    /// The listing view of this entry. `kb_info` is always present — the
    /// listing never distinguishes "empty" from "absent".
    pub fn to_record(&self) -> ArticleRecord {
        ArticleRecord {
            law_id: self.law_id.clone(),
            article_num: self.article_num.clone(),
            content: self.content.clone(),
            kb_info: Some(self.kb.clone()),
        }
    }
}

/// The authoritative article collection.
///
/// Entries keep insertion order; an upsert of an existing `article_num`
/// replaces the entry in place so the listing stays stable across edits.
/// Supports both ephemeral (in-memory) and file-backed modes — a persistent
/// catalog rewrites its JSON file after every mutation. Use
/// [`open`](Self::open) for ephemeral and [`open_persistent`](Self::open_persistent)
/// for file-backed storage that survives across process restarts.
pub struct ArticleCatalog {
    articles: Vec<StoredArticle>,
    path: Option<PathBuf>,
}

impl ArticleCatalog {
    /// Open an empty in-memory catalog.
    pub fn open() -> Self {
        Self {
            articles: Vec::new(),
            path: None,
        }
    }

    /// Open a file-backed catalog, loading existing entries if the file exists.
    pub fn open_persistent(path: &Path) -> Result<Self, StoreError> {
        let articles = if path.exists() {
            let data = fs::read_to_string(path)?;
            let articles: Vec<StoredArticle> = serde_json::from_str(&data)?;
            info!(count = articles.len(), path = %path.display(), "loaded catalog");
            articles
        } else {
            Vec::new()
        };
        Ok(Self {
            articles,
            path: Some(path.to_path_buf()),
        })
    }

    /// Number of articles in the catalog.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// The full listing, in storage order.
    pub fn list(&self) -> Vec<ArticleRecord> {
        self.articles.iter().map(StoredArticle::to_record).collect()
    }

    /// Look up one entry by its `article_num`.
    pub fn get(&self, article_num: &str) -> Option<&StoredArticle> {
        self.articles.iter().find(|a| a.article_num == article_num)
    }

    /// `(article_num, embedding)` pairs for retrieval.
    pub fn embeddings(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.articles
            .iter()
            .map(|a| (a.article_num.as_str(), a.embedding.as_slice()))
    }

    /// Create or update an article; the key lookup decides which.
    ///
    /// An existing `article_num` is replaced in place, keeping its position;
    /// a new one is appended. Either way the catalog never holds two entries
    /// with the same key. Persistent catalogs are flushed before returning.
    pub fn upsert(
        &mut self,
        submission: ArticleSubmission,
        embedding: Vec<f32>,
    ) -> Result<(), StoreError> {
        let entry = StoredArticle {
            law_id: submission.law_id,
            article_num: submission.article_num,
            content: submission.content,
            kb: KbInfo {
                conflicts: submission.conflicts,
                practical_risks: submission.practical_risks,
                related_decrees: submission.related_decrees,
            },
            embedding,
        };

        match self
            .articles
            .iter_mut()
            .find(|a| a.article_num == entry.article_num)
        {
            Some(existing) => {
                info!(article_num = %entry.article_num, "updated article");
                *existing = entry;
            }
            None => {
                info!(article_num = %entry.article_num, "created article");
                self.articles.push(entry);
            }
        }

        self.flush()
    }

    /// Delete an article by key. Returns whether an entry was removed;
    /// deleting an absent key is not an error.
    pub fn remove(&mut self, article_num: &str) -> Result<bool, StoreError> {
        let before = self.articles.len();
        self.articles.retain(|a| a.article_num != article_num);
        let removed = self.articles.len() < before;
        if removed {
            info!(article_num, "deleted article");
            self.flush()?;
        }
        Ok(removed)
    }

    /// Replace the whole catalog with freshly seeded entries.
    pub fn replace_all(&mut self, articles: Vec<StoredArticle>) -> Result<(), StoreError> {
        info!(count = articles.len(), "replacing catalog contents");
        self.articles = articles;
        self.flush()
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            let data = serde_json::to_string_pretty(&self.articles)?;
            fs::write(path, data)?;
        }
        Ok(())
    }
}
