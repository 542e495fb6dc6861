//! Axum route handler for the Reading API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::types::SourceAttribution;
use crate::readings::models::ReadingRequest;
use crate::readings::template::{render_prompts, select_template};
use crate::readings::validation::validate;
use crate::state::AppState;

/// The outbound payload: generated prose plus grounding citations
/// (possibly empty) in upstream order.
#[derive(Debug, Serialize)]
pub struct ReadingResponse {
    pub text: String,
    pub sources: Vec<SourceAttribution>,
}

/// POST /api/v1/readings
///
/// validate → select template → render prompts → one generation call → relay.
/// Body rejections (empty body, wrong content type, malformed JSON, missing
/// `readingType`) are normalised to the 400 JSON error contract; a request
/// that fails validation never reaches the generation API.
pub async fn handle_create_reading(
    State(state): State<AppState>,
    payload: Result<Json<ReadingRequest>, JsonRejection>,
) -> Result<Json<ReadingResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    validate(&request)?;

    let kind = select_template(&request);
    debug!(
        "Selected {kind:?} template for {:?} reading",
        request.reading_type
    );
    let prompts = render_prompts(kind, &request);

    let reading = state
        .generator
        .generate(&prompts.system, &prompts.user)
        .await?;

    Ok(Json(ReadingResponse {
        text: reading.text,
        sources: reading.sources,
    }))
}
