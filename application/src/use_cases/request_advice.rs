//! Request Advice use case.
//!
//! The single place where advice failures become user-facing text. The
//! gateway is optional: it is absent when no API credential was found at
//! startup, in which case every request is answered with
//! [`FallbackReply::NoCredential`] without any I/O.

use crate::ports::advice::AdvicePort;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GenerateRequest, LlmGateway};
use async_trait::async_trait;
use guide_domain::util::truncate_str;
use guide_domain::{FallbackReply, GuidePrompt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case answering a visitor's question through the LLM gateway
#[derive(Clone)]
pub struct RequestAdviceUseCase {
    gateway: Option<Arc<dyn LlmGateway>>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RequestAdviceUseCase {
    pub fn new(gateway: Option<Arc<dyn LlmGateway>>) -> Self {
        if gateway.is_none() {
            info!("No API credential configured; AI guide replies with a fixed message");
        }
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Collaborator without a gateway (no credential)
    pub fn unavailable() -> Self {
        Self::new(None)
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Whether a gateway was configured
    pub fn is_available(&self) -> bool {
        self.gateway.is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.gateway.as_deref().map(|g| g.model_name())
    }

    /// Execute the use case
    pub async fn execute(&self, message: &str) -> String {
        let Some(gateway) = &self.gateway else {
            return self.fallback(FallbackReply::NoCredential, None);
        };

        let request = GenerateRequest {
            prompt: message,
            system_instruction: GuidePrompt::system_instruction(),
            temperature: GuidePrompt::temperature(),
        };

        debug!(
            model = gateway.model_name(),
            "Requesting advice: {}",
            truncate_str(message, 100)
        );

        match gateway.generate(&request).await {
            Ok(text) if text.trim().is_empty() => {
                self.fallback(FallbackReply::EmptyResponse, None)
            }
            Ok(text) => {
                debug!(bytes = text.len(), "Advice received");
                text
            }
            Err(e) => {
                warn!("Advice request failed: {}", e);
                self.fallback(FallbackReply::RequestFailed, Some(e.to_string()))
            }
        }
    }

    fn fallback(&self, reason: FallbackReply, error: Option<String>) -> String {
        self.conversation_logger.log(ConversationEvent::new(
            "advice_fallback",
            serde_json::json!({
                "reason": reason.as_str(),
                "error": error,
            }),
        ));
        reason.text().to_string()
    }
}

#[async_trait]
impl AdvicePort for RequestAdviceUseCase {
    async fn request_advice(&self, message: &str) -> String {
        self.execute(message).await
    }
}
