//! Port trait implementation for `GenAiClient`.
//!
//! Implements the core-owned `GenAiPort` trait, converting internal client
//! errors and wire types to core DTOs at the boundary.

use async_trait::async_trait;
use promptgate_core::ports::{GenAiPort, GenAiPortError, GenAiPortResult, UpstreamModel};

use crate::client::GenAiClient;
use crate::error::GenAiError;
use crate::http::HttpBackend;

/// Convert internal `GenAiError` to core `GenAiPortError`.
fn map_error(err: GenAiError) -> GenAiPortError {
    match err {
        GenAiError::ApiRequestFailed { status, body } => {
            GenAiPortError::UpstreamStatus { status, body }
        }
        GenAiError::InvalidResponse { message } => GenAiPortError::InvalidResponse { message },
        GenAiError::Network(e) => GenAiPortError::Network {
            message: e.to_string(),
        },
        GenAiError::InvalidUrl(e) => GenAiPortError::Configuration {
            message: e.to_string(),
        },
        GenAiError::JsonParse(e) => GenAiPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> GenAiPort for GenAiClient<B> {
    async fn list_models(&self) -> GenAiPortResult<Vec<UpstreamModel>> {
        let entries = self.model_listing().await.map_err(map_error)?;
        Ok(entries
            .into_iter()
            .map(|entry| UpstreamModel {
                name: entry.name,
                generation_methods: entry.supported_generation_methods,
            })
            .collect())
    }

    async fn generate(&self, model: &str, prompt: &str) -> GenAiPortResult<String> {
        self.generate_content(model, prompt).await.map_err(map_error)
    }
}
