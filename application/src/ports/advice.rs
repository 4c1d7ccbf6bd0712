//! Advice collaborator port
//!
//! What the chat session talks to. Unlike [`LlmGateway`](super::llm_gateway::LlmGateway),
//! this port never fails: failures are turned into a user-safe reply
//! before they reach the caller.

use async_trait::async_trait;

#[async_trait]
pub trait AdvicePort: Send + Sync {
    /// Answer a visitor's question. Always returns displayable text.
    async fn request_advice(&self, message: &str) -> String;
}
