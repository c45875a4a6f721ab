use crate::llm_client::LlmClient;

/// Shared application state injected into route handlers via Axum extractors.
/// No per-request mutability; everything here is clone-and-go.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
