//! Gemini adapter
//!
//! Talks to the Generative Language REST API with `reqwest`. One question is
//! one `generateContent` call; nothing is streamed or retried.

pub mod error;
pub mod gateway;
pub mod types;

pub use error::GeminiError;
pub use gateway::GeminiLlmGateway;
