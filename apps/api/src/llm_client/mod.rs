/// LLM Client: the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the generative-language
/// API directly. All generation MUST go through this module.
///
/// Model: gemini-2.0-flash (hardcoded, do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

pub mod types;

use types::{GeminiApiError, GenerateContentRequest, GenerateContentResponse, SourceAttribution};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all generation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("generation API returned no content")]
    EmptyContent,

    #[error("generation blocked by safety filter: {0}")]
    SafetyBlocked(String),
}

/// The outcome of one generation call: prose plus grounding citations
/// (possibly empty) in the order the API returned them.
#[derive(Debug, Clone)]
pub struct GeneratedReading {
    pub text: String,
    pub sources: Vec<SourceAttribution>,
}

/// The generation seam. Handlers depend on this trait, not on the concrete
/// Gemini client, so tests can substitute a mock without network access.
///
/// Carried in `AppState` as `Arc<dyn ReadingGenerator>`.
#[async_trait]
pub trait ReadingGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<GeneratedReading, LlmError>;
}

/// Gemini client. One `reqwest::Client` (connection pool) per process,
/// credential injected at construction. No retries, no custom timeout:
/// each invocation is a single pass-through round trip.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Makes one `generateContent` call with search grounding enabled.
    ///
    /// Non-success upstream statuses are logged with their body and surfaced
    /// as `LlmError::Api` so the handler can mirror the status to the caller.
    async fn call(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest::grounded(user_prompt, system_prompt);
        let url = format!(
            "{GEMINI_API_BASE}/models/{MODEL}:generateContent?key={}",
            self.api_key
        );

        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {status}: {body}");
            // Prefer the message from the error envelope; fall back to the raw body.
            let message = serde_json::from_str::<GeminiApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse = response.json().await?;
        debug!(
            "Gemini call succeeded: {} candidate(s)",
            response.candidates.len()
        );

        Ok(response)
    }
}

#[async_trait]
impl ReadingGenerator for GeminiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<GeneratedReading, LlmError> {
        let response = self.call(system_prompt, user_prompt).await?;
        extract_reading(response)
    }
}

/// Extracts the first candidate's text and grounding attributions.
///
/// Failure order mirrors the upstream contract: a blocked prompt reports its
/// block reason, a SAFETY finish reason reports the same, anything else
/// without text is "no content generated".
fn extract_reading(response: GenerateContentResponse) -> Result<GeneratedReading, LlmError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.clone())
    {
        return Err(LlmError::SafetyBlocked(reason));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(LlmError::EmptyContent);
    };

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(LlmError::SafetyBlocked("SAFETY".to_string()));
    }

    let text = candidate
        .content
        .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
        .filter(|t| !t.is_empty())
        .ok_or(LlmError::EmptyContent)?;

    let sources = candidate
        .grounding_metadata
        .map(|m| {
            m.grounding_attributions
                .into_iter()
                .map(SourceAttribution::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(GeneratedReading { text, sources })
}
