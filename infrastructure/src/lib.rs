//! Infrastructure layer for prague-guide
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini HTTP gateway, configuration
//! file loading and the JSONL conversation log.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGeminiConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, Severity,
};
pub use gemini::{GeminiError, GeminiLlmGateway};
pub use logging::JsonlConversationLogger;
