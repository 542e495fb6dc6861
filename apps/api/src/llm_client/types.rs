//! Serde wire types for the Gemini `generateContent` endpoint.
//!
//! Request and response shapes are kept separate: requests serialize
//! exactly the fields we send, responses tolerate fields we ignore.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Body of a `generateContent` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    pub system_instruction: Content,
}

impl GenerateContentRequest {
    /// Builds a single-turn request with web-grounded search enabled.
    pub fn grounded(user_prompt: &str, system_prompt: &str) -> Self {
        Self {
            contents: vec![Content::text(user_prompt)],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
            system_instruction: Content::text(system_prompt),
        }
    }
}

/// Tool entry enabling Google Search grounding.
#[derive(Debug, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

/// Empty config object; presence alone turns grounding on.
#[derive(Debug, Serialize)]
pub struct GoogleSearch {}

/// Nested text-part container used for both `contents` and `systemInstruction`.
#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    pub finish_reason: Option<String>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// Response parts may carry non-text payloads we don't use; `text` stays optional.
#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

/// Returned when the prompt itself was rejected before generation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_attributions: Vec<GroundingAttribution>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingAttribution {
    pub web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// Gemini error envelope, e.g. `{"error": {"message": "...", "code": 429}}`.
#[derive(Debug, Deserialize)]
pub struct GeminiApiError {
    pub error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct GeminiApiErrorBody {
    pub message: String,
}

/// A single grounding citation relayed to the caller: the web source's
/// title and URI, when the API provided them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceAttribution {
    pub title: Option<String>,
    pub uri: Option<String>,
}

impl From<GroundingAttribution> for SourceAttribution {
    fn from(attribution: GroundingAttribution) -> Self {
        let web = attribution.web;
        Self {
            title: web.as_ref().and_then(|w| w.title.clone()),
            uri: web.and_then(|w| w.uri),
        }
    }
}
