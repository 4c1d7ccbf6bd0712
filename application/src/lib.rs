//! Application layer for prague-guide
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    advice::AdvicePort,
    chat_observer::{ChatObserver, NoChatObserver},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, GenerateRequest, LlmGateway},
};
pub use use_cases::chat_session::{ChatSession, SubmitOutcome};
pub use use_cases::guide_search::GuideSearch;
pub use use_cases::request_advice::RequestAdviceUseCase;
