//! Gemini LLM Gateway implementation

use super::error::{GeminiError, Result};
use super::types::{GenerateContentRequest, GenerateContentResponse, parse_error_message};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use guide_application::{GatewayError, GenerateRequest, LlmGateway};
use std::time::Duration;
use tracing::{debug, info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// LLM Gateway implementation for the Gemini `generateContent` endpoint
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiLlmGateway {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a gateway from the `[gemini]` config section.
    ///
    /// Returns `None` when no API key can be found.
    pub fn from_config(config: &FileGeminiConfig) -> Option<Self> {
        Self::from_resolved_key(config, config.resolve_api_key())
    }

    /// Like [`from_config`](Self::from_config) with a custom env lookup
    pub fn from_config_with<F>(config: &FileGeminiConfig, lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_resolved_key(config, config.resolve_api_key_with(lookup))
    }

    fn from_resolved_key(config: &FileGeminiConfig, api_key: Option<String>) -> Option<Self> {
        let Some(api_key) = api_key else {
            info!(
                "No Gemini API key (checked config, ${}, $GEMINI_API_KEY)",
                config.api_key_env
            );
            return None;
        };

        match Self::new(api_key, &config.model, &config.base_url) {
            Ok(gateway) => {
                info!(model = %config.model, "GeminiLlmGateway initialized");
                Some(gateway)
            }
            Err(e) => {
                warn!("Could not create HTTP client: {}", e);
                None
            }
        }
    }

    /// Full URL of the generateContent call
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn send(&self, body: &GenerateContentRequest) -> Result<GenerateContentResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = parse_error_message(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string()
            });
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerateRequest<'_>) -> std::result::Result<String, GatewayError> {
        let body = GenerateContentRequest::single_turn(
            request.prompt,
            request.system_instruction,
            request.temperature,
        );

        let response = self.send(&body).await?;

        if let Some(reason) = response.block_reason() {
            debug!(reason, "Prompt blocked by Gemini");
        }

        Ok(response.text())
    }
}
