//! Chat observer port
//!
//! Output port from [`ChatSession`](crate::use_cases::chat_session::ChatSession)
//! to the presentation layer. A REPL prints each appended message (keeping
//! the newest one in view) and shows a spinner while a request is in flight.

use guide_domain::{ChatMessage, ChatState};

/// Callbacks fired after the session state has been updated.
///
/// Called outside the session lock; implementations may read the session.
pub trait ChatObserver: Send + Sync {
    /// A message was appended to the transcript
    fn on_message_appended(&self, _message: &ChatMessage) {}

    /// The request state changed
    fn on_state_changed(&self, _state: ChatState) {}
}

/// No-op observer
pub struct NoChatObserver;

impl ChatObserver for NoChatObserver {}
