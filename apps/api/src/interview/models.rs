use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interview::scoring::FinalScore;

/// One (question, answer) exchange. Serialized as `{"q": ..., "a": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub q: String,
    pub a: String,
}

/// A candidate's live interview. Lives in the `SessionStore` from `start`
/// until `finish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub resume_text: String,
    pub role: String,
    pub tone: String,
    /// Not bounded by the question list; past the end means "exhausted".
    pub question_index: usize,
    pub transcript: Vec<Turn>,
}

impl Session {
    pub fn new(id: String, resume_text: String, role: String, tone: String) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            resume_text,
            role,
            tone,
            question_index: 0,
            transcript: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub resume_text: String,
    pub role: String,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub session_id: String,
    pub question: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub session_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialScore {
    pub depth: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    /// `null` once the question list is exhausted.
    pub next_question: Option<String>,
    pub coaching: String,
    pub partial_score: PartialScore,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishResponse {
    pub final_score: FinalScore,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub transcript: Vec<Turn>,
}
