//! Append-only chat transcript.

use super::entities::{ChatMessage, MessageId, Role};
use serde::Serialize;

/// Greeting shown at the top of every new conversation
pub const GREETING: &str =
    "Hello! I am your AI Prague Guide. Ask me anything about local rules, transport, or tips!";

/// Ordered conversation history (Aggregate)
///
/// Messages can only be appended. Ids start at 1 and increase by one per
/// message, so renderers can key on them without reshuffling.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// A transcript opened by the assistant's [`GREETING`]
    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.push_assistant(GREETING);
        transcript
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Role::User, text.into())
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Role::Assistant, text.into())
    }

    fn push(&mut self, role: Role, text: String) -> &ChatMessage {
        let id = MessageId::new(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, role, text));
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_with_greeting_starts_with_assistant() {
        let transcript = Transcript::with_greeting();
        assert_eq!(transcript.len(), 1);
        let first = &transcript.messages()[0];
        assert_eq!(first.role(), Role::Assistant);
        assert_eq!(first.text(), GREETING);
        assert_eq!(first.id(), MessageId::new(1));
    }

    #[test]
    fn test_ids_increase_in_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("a");
        transcript.push_assistant("r1");
        transcript.push_user("b");

        let ids: Vec<u64> = transcript.messages().iter().map(|m| m.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_text_kept_verbatim() {
        let mut transcript = Transcript::new();
        let msg = transcript.push_user("  where can I drink?  ");
        assert_eq!(msg.text(), "  where can I drink?  ");
    }

    #[test]
    fn test_default_matches_new() {
        let mut transcript = Transcript::default();
        assert_eq!(transcript.push_user("a").id(), MessageId::new(1));
    }
}
