//! LLM Gateway port
//!
//! Defines the interface for communicating with a text-generation provider.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A single generation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateRequest<'a> {
    /// The user's text, sent verbatim
    pub prompt: &'a str,
    /// Persona instruction applied to this request
    pub system_instruction: &'a str,
    pub temperature: f32,
}

/// Gateway for LLM communication
///
/// Implementations (adapters) live in the infrastructure layer. One call is
/// one request/response round trip; there is no streaming and no retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Identifier of the model this gateway talks to
    fn model_name(&self) -> &str;

    /// Generate a reply. `Ok` may carry an empty string when the model
    /// produced no text.
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::QuotaExceeded("daily limit".to_string());
        assert_eq!(err.to_string(), "Quota exceeded: daily limit");
    }
}
