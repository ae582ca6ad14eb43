//! Request and response DTOs for the HTTP API.

use serde::{Deserialize, Serialize};

/// Inbound chat request body.
///
/// Both fields default to empty strings: a missing `message` is forwarded to
/// the model untouched, and a missing `context` resolves to the default
/// persona downstream.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: String,
}

/// Outbound chat reply body. The same shape is used for success and failure
/// so clients only ever parse one schema.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
