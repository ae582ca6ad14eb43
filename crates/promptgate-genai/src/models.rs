//! Wire types for the Generative Language API.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Internal client configuration, derived from the public config.
pub(crate) struct GenAiConfig {
    pub base_url: Url,
    pub api_key: String,
    pub user_agent: String,
    pub timeout: Duration,
}

// ---------------------------------------------------------------------------
// Model listing (GET /v1beta/models)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ModelListing {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModelEntry {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

// ---------------------------------------------------------------------------
// Generation (POST /v1beta/{model}:generateContent)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// First generated text span, if the response structurally contains one.
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
    }
}
