//! Editor drafts: the form-side view of an article before submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotations::{decode_list, encode_list};
use crate::article::{ArticleRecord, ArticleSubmission};

/// A required scalar field was empty or all-whitespace at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("thiếu Mã Luật (law_id)")]
    MissingLawId,
    #[error("thiếu Số Điều (article_num)")]
    MissingArticleNum,
    #[error("thiếu Nội dung chi tiết luật (content)")]
    MissingContent,
}

/// The article editor's form state.
///
/// Scalar fields hold the article text verbatim; the three annotation fields
/// hold delimited free text in the codec's format. A draft is just text —
/// nothing about it is validated until [`validate`](Self::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub law_id: String,
    pub article_num: String,
    pub content: String,
    pub conflicts_text: String,
    pub practical_risks_text: String,
    pub related_decrees_text: String,
}

impl ArticleDraft {
    /// Load an existing record into the editor for an update.
    ///
    /// Scalars are copied verbatim; each annotation list is re-encoded into
    /// its delimited text form. The caller must keep `article_num` immutable
    /// for the duration of the edit — it is the record's address.
    pub fn from_record(record: &ArticleRecord) -> Self {
        let kb = record.kb();
        Self {
            law_id: record.law_id.clone(),
            article_num: record.article_num.clone(),
            content: record.content.clone(),
            conflicts_text: encode_list(&kb.conflicts),
            practical_risks_text: encode_list(&kb.practical_risks),
            related_decrees_text: encode_list(&kb.related_decrees),
        }
    }

    /// Validate the draft and produce the submission body.
    ///
    /// Fails on the first missing required scalar, in form order. On success
    /// the scalars are submitted verbatim (interior line breaks in `content`
    /// included) and the annotation fields are decoded into lists, which are
    /// always present — possibly empty — in the result.
    pub fn validate(&self) -> Result<ArticleSubmission, ValidationError> {
        if self.law_id.trim().is_empty() {
            return Err(ValidationError::MissingLawId);
        }
        if self.article_num.trim().is_empty() {
            return Err(ValidationError::MissingArticleNum);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingContent);
        }

        Ok(ArticleSubmission {
            law_id: self.law_id.clone(),
            article_num: self.article_num.clone(),
            content: self.content.clone(),
            conflicts: decode_list(&self.conflicts_text),
            practical_risks: decode_list(&self.practical_risks_text),
            related_decrees: decode_list(&self.related_decrees_text),
        })
    }
}
