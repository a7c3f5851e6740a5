//! Article records and their knowledge-base annotations.

use serde::{Deserialize, Serialize};

/// Knowledge base attached to an article: three independent annotation lists.
///
/// Historical records may omit any of the lists; `#[serde(default)]` decodes
/// a missing list as empty. The lists never imply each other — an article can
/// have risks recorded and no conflicts, or the reverse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbInfo {
    /// Statements of overlap or contradiction with other legal text.
    #[serde(default)]
    pub conflicts: Vec<String>,
    /// Cautionary notes about real-world application.
    #[serde(default)]
    pub practical_risks: Vec<String>,
    /// References to implementing decrees and guidance documents.
    #[serde(default)]
    pub related_decrees: Vec<String>,
}

impl KbInfo {
    /// True when all three annotation lists are empty.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
            && self.practical_risks.is_empty()
            && self.related_decrees.is_empty()
    }
}

/// A statute article as listed by the admin endpoint.
///
/// `article_num` is the addressable key for update and delete; no two records
/// in a catalog share it. `law_id` names the source statute and travels with
/// the record but does not address it. `content` is the normative text and
/// may contain embedded line breaks, which are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub law_id: String,
    pub article_num: String,
    pub content: String,
    /// Absent only in records persisted before the knowledge base existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_info: Option<KbInfo>,
}

impl ArticleRecord {
    /// The knowledge base, treating an absent block as empty.
    pub fn kb(&self) -> KbInfo {
        self.kb_info.clone().unwrap_or_default()
    }
}

/// The submission body for the create-or-update endpoint.
///
/// Unlike [`ArticleRecord`], the three annotation lists are always present
/// (possibly empty) — the editor resubmits every field on each save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSubmission {
    pub law_id: String,
    pub article_num: String,
    pub content: String,
    #[serde(default)]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub practical_risks: Vec<String>,
    #[serde(default)]
    pub related_decrees: Vec<String>,
}

impl ArticleSubmission {
    /// Split into the record part and its knowledge base.
    pub fn into_parts(self) -> (ArticleRecord, KbInfo) {
        let kb = KbInfo {
            conflicts: self.conflicts,
            practical_risks: self.practical_risks,
            related_decrees: self.related_decrees,
        };
        let record = ArticleRecord {
            law_id: self.law_id,
            article_num: self.article_num,
            content: self.content,
            kb_info: Some(kb.clone()),
        };
        (record, kb)
    }
}
