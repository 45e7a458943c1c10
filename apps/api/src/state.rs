use std::sync::Arc;

use crate::config::CredentialSource;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable; each request works on its own clone.
#[derive(Clone)]
pub struct AppState {
    /// Completion provider. Default: OpenAiClient. Tests swap in a stub.
    pub llm: Arc<dyn CompletionProvider>,
    /// Resolved on every request so a missing key fails only that request.
    pub credential: CredentialSource,
}
