//! End-user search session and result presentation state.

use phaply_core::SearchResponse;
use tracing::info;

use crate::http::{ApiClient, ClientError};

/// Placeholder shown on the conflicts tab when no conflicts are recorded.
pub const NO_CONFLICTS_PLACEHOLDER: &str = "Chưa ghi nhận mâu thuẫn lớn.";
/// Placeholder shown on the risks tab when no risks are recorded.
pub const NO_RISKS_PLACEHOLDER: &str = "Không có dữ liệu rủi ro.";

/// The four result tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    /// The statute text itself.
    #[default]
    OriginalText,
    /// Conflicting provisions plus implementing guidance.
    ConflictsAndGuidance,
    /// Real-world cautionary notes.
    PracticalRisks,
    /// The generated advisory explanation.
    AiExplanation,
}

/// Content of an annotation tab: the recorded entries, or the fixed
/// empty-state placeholder when there are none.
#[derive(Debug, PartialEq, Eq)]
pub enum AnnotationPanel<'a> {
    Entries(&'a [String]),
    Placeholder(&'static str),
}

/// A successfully resolved search result plus its view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundResult {
    pub law_id: String,
    pub article_num: String,
    pub content: String,
    pub conflicts: Vec<String>,
    pub practical_risks: Vec<String>,
    pub related_decrees: Vec<String>,
    pub ai_response: String,
    active_tab: ResultTab,
}

impl FoundResult {
    fn from_response(resp: SearchResponse) -> Self {
        Self {
            law_id: resp.law_id.unwrap_or_default(),
            article_num: resp.article_num.unwrap_or_default(),
            content: resp.content.unwrap_or_default(),
            conflicts: resp.conflicts,
            practical_risks: resp.practical_risks,
            related_decrees: resp.related_decrees,
            ai_response: resp.ai_response.unwrap_or_default(),
            active_tab: ResultTab::default(),
        }
    }

    pub fn active_tab(&self) -> ResultTab {
        self.active_tab
    }

    /// Switch tabs. Any tab is reachable from any other.
    pub fn select_tab(&mut self, tab: ResultTab) {
        self.active_tab = tab;
    }

    /// The conflicts list, or its placeholder when empty.
    pub fn conflicts_panel(&self) -> AnnotationPanel<'_> {
        if self.conflicts.is_empty() {
            AnnotationPanel::Placeholder(NO_CONFLICTS_PLACEHOLDER)
        } else {
            AnnotationPanel::Entries(&self.conflicts)
        }
    }

    /// The risks list, or its placeholder when empty.
    pub fn risks_panel(&self) -> AnnotationPanel<'_> {
        if self.practical_risks.is_empty() {
            AnnotationPanel::Placeholder(NO_RISKS_PLACEHOLDER)
        } else {
            AnnotationPanel::Entries(&self.practical_risks)
        }
    }

    /// Implementing guidance, rendered as a plain list (no placeholder —
    /// it shares the conflicts tab and may simply be empty).
    pub fn related_decrees(&self) -> &[String] {
        &self.related_decrees
    }
}

/// Search workflow states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Searching,
    Found(FoundResult),
    /// The boundary answered, but nothing matched. Informational, not an error.
    NotFound { message: String },
    /// The boundary failed or was unreachable.
    Error { message: String },
}

/// The end-user search session.
///
/// Re-entrant: any terminal state accepts a new submission. The caller is
/// expected to disable its trigger control while
/// [`is_searching`](Self::is_searching) — this layer does not prevent a
/// second in-flight call on its own.
#[derive(Debug, Default)]
pub struct QuerySession {
    state: QueryState,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state, QueryState::Searching)
    }

    /// The found result, when in the `Found` state.
    pub fn result(&self) -> Option<&FoundResult> {
        match &self.state {
            QueryState::Found(result) => Some(result),
            _ => None,
        }
    }

    /// Mutable access to the found result, for tab selection.
    pub fn result_mut(&mut self) -> Option<&mut FoundResult> {
        match &mut self.state {
            QueryState::Found(result) => Some(result),
            _ => None,
        }
    }

    /// Submit a query. A blank query is a no-op — no boundary call, no
    /// state change. Otherwise the session passes through `Searching` and
    /// lands in exactly one of `Found`, `NotFound`, or `Error`.
    pub async fn submit(&mut self, client: &ApiClient, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        self.state = QueryState::Searching;

        match client.search(query).await {
            Ok(resp) if resp.found => {
                info!(article_num = resp.article_num.as_deref().unwrap_or(""), "search hit");
                // Entering Found always lands on the original-text tab.
                self.state = QueryState::Found(FoundResult::from_response(resp));
            }
            Ok(resp) => {
                self.state = QueryState::NotFound {
                    message: resp.message.unwrap_or_default(),
                };
            }
            Err(err) => {
                self.state = QueryState::Error {
                    message: err.user_message(),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn found_body() -> serde_json::Value {
        json!({
            "found": true,
            "law_id": "Luật Đất đai 2024",
            "article_num": "Điều 127",
            "content": "Nội dung điều luật.",
            "conflicts": [],
            "practical_risks": ["Rủi ro A"],
            "related_decrees": [],
            "ai_response": "Giải thích của AI."
        })
    }

    #[tokio::test]
    async fn blank_query_is_a_noop() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut session = QuerySession::new();
        session.submit(&client, "").await;
        session.submit(&client, "   ").await;
        assert_eq!(*session.state(), QueryState::Idle);
    }

    #[tokio::test]
    async fn found_result_resets_to_original_text_tab() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .and(body_json(json!({ "query": "thủ tục bán đất" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(found_body()))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut session = QuerySession::new();
        session.submit(&client, "thủ tục bán đất").await;

        let result = session.result().expect("should be Found");
        assert_eq!(result.article_num, "Điều 127");
        assert_eq!(result.active_tab(), ResultTab::OriginalText);
        assert_eq!(result.ai_response, "Giải thích của AI.");

        // Risks tab shows the one entry; conflicts tab shows its placeholder.
        assert_eq!(
            result.risks_panel(),
            AnnotationPanel::Entries(&["Rủi ro A".to_string()])
        );
        assert_eq!(
            result.conflicts_panel(),
            AnnotationPanel::Placeholder(NO_CONFLICTS_PLACEHOLDER)
        );
    }

    #[tokio::test]
    async fn new_found_result_resets_tab_selection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(found_body()))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut session = QuerySession::new();
        session.submit(&client, "câu hỏi thứ nhất").await;
        session
            .result_mut()
            .unwrap()
            .select_tab(ResultTab::AiExplanation);
        assert_eq!(session.result().unwrap().active_tab(), ResultTab::AiExplanation);

        session.submit(&client, "câu hỏi thứ hai").await;
        assert_eq!(session.result().unwrap().active_tab(), ResultTab::OriginalText);
    }

    #[tokio::test]
    async fn not_found_carries_message_and_no_article() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "found": false,
                "message": "Không tìm thấy điều luật phù hợp"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut session = QuerySession::new();
        session.submit(&client, "một câu hỏi lạc đề").await;

        assert_eq!(
            *session.state(),
            QueryState::NotFound {
                message: "Không tìm thấy điều luật phù hợp".into()
            }
        );
        assert!(session.result().is_none());
    }

    #[tokio::test]
    async fn error_uses_boundary_detail_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "detail": "Thiếu cấu hình GOOGLE_API_KEY trong file .env của Backend."
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut session = QuerySession::new();
        session.submit(&client, "câu hỏi").await;

        assert_eq!(
            *session.state(),
            QueryState::Error {
                message: "Thiếu cấu hình GOOGLE_API_KEY trong file .env của Backend.".into()
            }
        );
    }

    #[tokio::test]
    async fn error_without_detail_uses_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut session = QuerySession::new();
        session.submit(&client, "câu hỏi").await;

        assert_eq!(
            *session.state(),
            QueryState::Error {
                message: crate::http::CONNECTIVITY_MESSAGE.into()
            }
        );
    }

    #[tokio::test]
    async fn session_is_reentrant_after_error() {
        let server = MockServer::start().await;
        let failing = Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut session = QuerySession::new();
        session.submit(&client, "câu hỏi").await;
        assert!(matches!(session.state(), QueryState::Error { .. }));
        drop(failing);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(found_body()))
            .mount(&server)
            .await;

        session.submit(&client, "câu hỏi").await;
        assert!(matches!(session.state(), QueryState::Found(_)));
    }

    #[test]
    fn panels_show_entries_when_present() {
        let result = FoundResult {
            law_id: "L".into(),
            article_num: "Điều 1".into(),
            content: "X".into(),
            conflicts: vec!["Chồng chéo A".into()],
            practical_risks: vec![],
            related_decrees: vec!["Nghị định 102/2024/NĐ-CP".into()],
            ai_response: "".into(),
            active_tab: ResultTab::default(),
        };
        assert_eq!(
            result.conflicts_panel(),
            AnnotationPanel::Entries(&["Chồng chéo A".to_string()])
        );
        assert_eq!(
            result.risks_panel(),
            AnnotationPanel::Placeholder(NO_RISKS_PLACEHOLDER)
        );
        assert_eq!(result.related_decrees().len(), 1);
    }
}
