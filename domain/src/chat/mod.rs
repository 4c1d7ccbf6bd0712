//! Chat with the AI guide.
//!
//! - [`entities::ChatMessage`] - an immutable message with a monotonic id
//! - [`entities::ChatState`] - `Idle` / `Sending`
//! - [`transcript::Transcript`] - append-only conversation history

pub mod entities;
pub mod transcript;
