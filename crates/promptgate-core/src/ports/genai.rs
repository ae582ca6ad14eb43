//! Generative-language client port trait.

use async_trait::async_trait;
use thiserror::Error;

/// Generation capability a model must advertise to be usable.
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// One model descriptor from the provider's listing endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamModel {
    /// Provider identifier, usually already namespace-prefixed.
    pub name: String,
    /// Generation methods the model supports.
    pub generation_methods: Vec<String>,
}

impl UpstreamModel {
    /// Whether this model can serve generation calls.
    #[must_use]
    pub fn supports_generation(&self) -> bool {
        self.generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT_METHOD)
    }
}

/// Errors from upstream generative-API operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum GenAiPortError {
    /// The upstream returned a non-success status.
    ///
    /// The raw error body is carried for diagnostics but deliberately kept
    /// out of the display form so it cannot leak to callers.
    #[error("upstream request failed with status {status}")]
    UpstreamStatus {
        /// HTTP status code returned by the provider
        status: u16,
        /// Raw error body, for logs only
        body: String,
    },

    /// Network or connectivity error.
    #[error("network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The upstream response could not be interpreted.
    #[error("invalid upstream response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error (bad base URL, missing credential).
    #[error("configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for port operations.
pub type GenAiPortResult<T> = Result<T, GenAiPortError>;

/// Port trait for the upstream generative-text provider.
///
/// This trait defines the interface the core domain uses to reach the
/// provider. The implementation lives in `promptgate-genai`.
///
/// # Design
///
/// - Uses core-owned DTOs, not provider API types
/// - Returns `GenAiPortError` for all failures
/// - Async methods for network operations
#[async_trait]
pub trait GenAiPort: Send + Sync {
    /// List the models the provider currently offers.
    async fn list_models(&self) -> GenAiPortResult<Vec<UpstreamModel>>;

    /// Run one generation call against a named model.
    ///
    /// `model` must be the namespace-prefixed identifier. `prompt` is the
    /// combined instruction + user message body. A structurally empty
    /// response is reported as success with a placeholder reply by the
    /// implementation, never as an error.
    async fn generate(&self, model: &str, prompt: &str) -> GenAiPortResult<String>;
}
