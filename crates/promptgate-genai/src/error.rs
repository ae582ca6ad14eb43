//! Internal error types for Generative Language API operations.
//!
//! These errors are internal to `promptgate-genai` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for client operations.
pub type GenAiResult<T> = Result<T, GenAiError>;

/// Errors related to Generative Language API operations.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// API request failed with an HTTP error status.
    ///
    /// The raw body is kept for diagnostics; the display form shows the
    /// status only so the body cannot leak through error messages.
    #[error("generative API request failed with status {status}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Raw error body, for logs only
        body: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("invalid response from generative API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_request_failed_display_hides_body() {
        let error = GenAiError::ApiRequestFailed {
            status: 429,
            body: "{\"error\":{\"message\":\"quota exceeded\"}}".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("429"));
        assert!(!msg.contains("quota exceeded"));
    }

    #[test]
    fn invalid_response_display_carries_message() {
        let error = GenAiError::InvalidResponse {
            message: "missing candidates array".to_string(),
        };
        assert!(error.to_string().contains("missing candidates array"));
    }
}
