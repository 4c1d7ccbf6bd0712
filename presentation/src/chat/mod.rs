//! Interactive chat module
//!
//! Provides a line-editor based chat interface for the AI guide.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
