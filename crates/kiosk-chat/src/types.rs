//! Response types produced by the dialogue engine.

use serde::Serialize;

use kiosk_catalog::Resources;

/// Which policy branch produced a reply. Not serialized; carried for
/// logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Branch {
    #[default]
    EmptyInput,
    Greeting,
    Goodbye,
    TooShort,
    FollowUpResolved,
    HighConfidence,
    MidConfidenceSuggest,
    LowConfidenceSuggest,
    /// Embedding collaborator failed; a generic retry reply was served.
    Fallback,
}

/// One did-you-mean candidate.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub question: String,
    pub entry_id: usize,
    pub score: f32,
    #[serde(flatten)]
    pub resources: Resources,
}

/// The structured answer for one query, serialized as the `/ask`
/// response body. Empty collections and absent options are omitted from
/// the JSON so each branch only carries its own fields.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    pub session_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<String>,
    #[serde(flatten)]
    pub resources: Resources,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_convo_timeout: Option<u64>,
    #[serde(skip)]
    pub branch: Branch,
}

impl Reply {
    /// A bare reply carrying only the branch, answer text, and session id.
    /// Branch-specific fields are filled in by the engine.
    pub fn new(branch: Branch, answer: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            confidence: None,
            session_id: session_id.into(),
            suggestions: Vec::new(),
            related: Vec::new(),
            quick_replies: Vec::new(),
            resources: Resources::default(),
            follow_up_text: None,
            end_convo_timeout: None,
            branch,
        }
    }
}

/// Service readiness snapshot, serialized as the `/health` response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthInfo {
    pub status: String,
    pub faq_count: usize,
    pub model: String,
}
