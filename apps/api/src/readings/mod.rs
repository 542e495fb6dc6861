// Reading Request Handler: validation, template selection, prompt rendering.
// All generation calls go through llm_client, never directly to Gemini.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod template;
pub mod validation;
