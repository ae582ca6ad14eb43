//! HTTP backend abstraction for the Generative Language API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. There is deliberately no transport-level retry: the
//! fallback chain grants each model candidate exactly one attempt per
//! request, so retries belong to the orchestrator's candidate iteration,
//! not here.

use crate::error::{GenAiError, GenAiResult};
use crate::models::GenAiConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the provider.
///
/// This is an implementation detail - external code should use the client
/// through the `GenAiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GenAiResult<T>;

    /// POST a JSON body to a URL and deserialize the response.
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> GenAiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GenAiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Map a non-success response to an error, capturing the raw body.
    ///
    /// The body is logged at debug level for diagnostics and kept on the
    /// error value; it is never part of the error's display form.
    async fn error_from_response(response: reqwest::Response) -> GenAiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status, body, "upstream returned error status");
        GenAiError::ApiRequestFailed { status, body }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GenAiResult<T> {
        let response = self.client.get(url.as_str()).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let data: T = response.json().await?;
        Ok(data)
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> GenAiResult<T> {
        let response = self.client.post(url.as_str()).json(body).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
