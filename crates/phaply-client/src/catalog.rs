//! Administrator session: the catalog table plus the article editor.
//!
//! One session per form instance. Mutations follow a strict shape: validate
//! before touching the boundary, at most one call in flight, and every
//! successful mutation is followed by a full re-list before the busy flag
//! clears — the authoritative state lives behind the boundary, so nothing is
//! patched locally. A failed call leaves the last successfully loaded listing
//! untouched and re-enables input for a manual retry.

use phaply_core::{ArticleDraft, ArticleRecord, ValidationError};
use tracing::warn;

use crate::http::{ApiClient, ClientError};

/// Status line styling: informational vs failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// A human-readable status message with its styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// Outcome of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validated, saved, and the listing re-fetched.
    Saved,
    /// A required field was missing; the boundary was never called.
    Invalid(ValidationError),
    /// The boundary call failed; prior state is preserved.
    Failed(ClientError),
    /// Another call was in flight; nothing happened.
    Busy,
}

/// Outcome of a remove attempt.
#[derive(Debug)]
pub enum RemoveOutcome {
    /// Deleted and the listing re-fetched.
    Removed,
    /// The destructive-action guard: no confirmation, no boundary call.
    NotConfirmed,
    /// The boundary call failed; prior state is preserved.
    Failed(ClientError),
    /// Another call was in flight; nothing happened.
    Busy,
}

/// The administrator workflow state.
pub struct CatalogSession {
    articles: Vec<ArticleRecord>,
    busy: bool,
    status: Option<StatusLine>,
    form: ArticleDraft,
    editing: bool,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSession {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            busy: false,
            status: None,
            form: ArticleDraft::default(),
            editing: false,
        }
    }

    /// The last successfully loaded listing.
    pub fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }

    /// True while a boundary call is in flight; the view disables its
    /// submit/delete controls on this flag.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn form(&self) -> &ArticleDraft {
        &self.form
    }

    /// Mutable access for the form's input fields. While editing, the view
    /// must keep the `article_num` input disabled — see
    /// [`article_num_locked`](Self::article_num_locked).
    pub fn form_mut(&mut self) -> &mut ArticleDraft {
        &mut self.form
    }

    /// True while an existing record is loaded for update; its `article_num`
    /// is the record's address and must not be editable.
    pub fn article_num_locked(&self) -> bool {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Fetch the full listing. On failure the previous listing is kept.
    pub async fn refresh(&mut self, client: &ApiClient) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.refresh_inner(client).await;
        self.busy = false;
    }

    /// Load a record into the editor for update.
    pub fn begin_edit(&mut self, record: &ArticleRecord) {
        self.form = ArticleDraft::from_record(record);
        self.editing = true;
    }

    /// Discard the edit and return the form to create mode.
    pub fn cancel_edit(&mut self) {
        self.form = ArticleDraft::default();
        self.editing = false;
    }

    /// Validate the form and submit it as a create-or-update.
    ///
    /// Validation failures are shown inline and never reach the boundary.
    /// On success the form resets, edit mode ends, and the listing is
    /// re-fetched before the session becomes available again.
    pub async fn submit(&mut self, client: &ApiClient) -> SubmitOutcome {
        if self.busy {
            return SubmitOutcome::Busy;
        }

        let submission = match self.form.validate() {
            Ok(submission) => submission,
            Err(err) => {
                self.status = Some(StatusLine {
                    kind: StatusKind::Error,
                    text: format!("Vui lòng điền đủ thông tin bắt buộc: {err}"),
                });
                return SubmitOutcome::Invalid(err);
            }
        };

        self.busy = true;
        let was_editing = self.editing;
        let outcome = match client.upsert_article(&submission).await {
            Ok(_) => {
                self.status = Some(StatusLine {
                    kind: StatusKind::Info,
                    text: if was_editing {
                        "Đã cập nhật thành công!".into()
                    } else {
                        "Đã thêm mới thành công!".into()
                    },
                });
                self.form = ArticleDraft::default();
                self.editing = false;
                // Mutation implies re-sync: the server recomputes derived
                // state, so the listing must come back from it.
                self.refresh_inner(client).await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                warn!(error = %err, "article submit failed");
                self.status = Some(StatusLine {
                    kind: StatusKind::Error,
                    text: "Có lỗi xảy ra khi lưu. Vui lòng thử lại.".into(),
                });
                SubmitOutcome::Failed(err)
            }
        };
        self.busy = false;
        outcome
    }

    /// Delete an article by key, guarded by explicit confirmation.
    ///
    /// Without `confirmed` the boundary is never called. With it, the
    /// deletion is followed by a full re-list before the session is
    /// available again.
    pub async fn remove(
        &mut self,
        client: &ApiClient,
        article_num: &str,
        confirmed: bool,
    ) -> RemoveOutcome {
        if self.busy {
            return RemoveOutcome::Busy;
        }
        if !confirmed {
            return RemoveOutcome::NotConfirmed;
        }

        self.busy = true;
        let outcome = match client.delete_article(article_num).await {
            Ok(_) => {
                self.status = Some(StatusLine {
                    kind: StatusKind::Info,
                    text: "Đã xoá thành công!".into(),
                });
                self.refresh_inner(client).await;
                RemoveOutcome::Removed
            }
            Err(err) => {
                warn!(error = %err, article_num, "article delete failed");
                self.status = Some(StatusLine {
                    kind: StatusKind::Error,
                    text: "Lỗi khi xoá.".into(),
                });
                RemoveOutcome::Failed(err)
            }
        };
        self.busy = false;
        outcome
    }

    async fn refresh_inner(&mut self, client: &ApiClient) {
        match client.list_articles().await {
            Ok(articles) => self.articles = articles,
            Err(err) => {
                // Keep the last-known-good listing; only the status changes.
                warn!(error = %err, "listing refresh failed");
                self.status = Some(StatusLine {
                    kind: StatusKind::Error,
                    text: "Lỗi khi tải danh sách điều luật.".into(),
                });
            }
        }
    }
}
