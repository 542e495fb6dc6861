use std::sync::Arc;

use crate::llm_client::ReadingGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The only process-wide value is the generation client; the API credential
/// lives inside it, injected once at startup and never read ambiently.
#[derive(Clone)]
pub struct AppState {
    /// The generation seam. Production wires in `GeminiClient`; tests swap
    /// in a mock so no request ever leaves the process.
    pub generator: Arc<dyn ReadingGenerator>,
}
