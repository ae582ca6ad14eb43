//! Generative Language API client.

use url::Url;

use crate::config::GenAiClientConfig;
use crate::error::{GenAiError, GenAiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{
    Content, GenAiConfig, GenerateContentRequest, GenerateContentResponse, ModelEntry,
    ModelListing, Part,
};

/// Reply used when the provider returns a structurally empty response.
///
/// Absence of generated content is a valid (if unhelpful) outcome, distinct
/// from an upstream error.
pub const NO_CONTENT_REPLY: &str = "No response generated.";

const API_VERSION: &str = "v1beta";

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultGenAiClient = GenAiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Generative Language API.
///
/// Generic over an HTTP backend for testability. Use `DefaultGenAiClient`
/// for production code.
pub struct GenAiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: GenAiConfig,
}

impl DefaultGenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &GenAiClientConfig) -> Self {
        let internal = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal);
        Self {
            backend,
            config: internal,
        }
    }

    fn to_internal_config(config: &GenAiClientConfig) -> GenAiConfig {
        GenAiConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://generativelanguage.googleapis.com")
                    .expect("default URL is valid")
            }),
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }
}

impl<B: HttpBackend> GenAiClient<B> {
    /// Create a client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: GenAiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Fetch the provider's model listing.
    pub async fn model_listing(&self) -> GenAiResult<Vec<ModelEntry>> {
        let url = self.keyed_url(&format!("/{API_VERSION}/models"))?;
        let listing: ModelListing = self.backend.get_json(&url).await?;
        Ok(listing.models)
    }

    /// Run one generation call against a namespace-prefixed model.
    ///
    /// Returns the first generated text span, or [`NO_CONTENT_REPLY`] when
    /// the response carries no candidates or parts.
    pub async fn generate_content(&self, model: &str, prompt: &str) -> GenAiResult<String> {
        let url = self.keyed_url(&format!("/{API_VERSION}/{model}:generateContent"))?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };
        let body = serde_json::to_value(&request)?;

        let response: GenerateContentResponse = self.backend.post_json(&url, &body).await?;
        Ok(response
            .first_text()
            .unwrap_or_else(|| NO_CONTENT_REPLY.to_string()))
    }

    /// Build an endpoint URL carrying the credential as a query parameter.
    ///
    /// The resulting URL embeds the key, so it must never be logged.
    fn keyed_url(&self, path: &str) -> Result<Url, GenAiError> {
        let mut url = self.config.base_url.join(path)?;
        url.query_pairs_mut()
            .append_pair("key", &self.config.api_key);
        Ok(url)
    }
}
