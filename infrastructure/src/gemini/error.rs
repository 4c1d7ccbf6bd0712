//! Error types for the Gemini adapter

use guide_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Generative Language API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        let text = err.to_string();
        match err {
            GeminiError::Http(_) => GatewayError::ConnectionError(text),
            GeminiError::Api { status: 401 | 403, .. } => GatewayError::Unauthorized(text),
            GeminiError::Api { status: 429, .. } => GatewayError::QuotaExceeded(text),
            GeminiError::Api { .. } => GatewayError::RequestFailed(text),
            GeminiError::Decode(_) => GatewayError::MalformedResponse(text),
        }
    }
}
