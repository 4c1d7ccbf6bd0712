//! Chat session use case.
//!
//! Owns the transcript, the input draft and the `Idle`/`Sending` state.
//! A submission appends the visitor's message, asks the advice port once,
//! appends the reply and returns to `Idle`. While a reply is pending every
//! further submission is rejected with [`SubmitOutcome::Busy`].
//!
//! The state lock is never held across the advice call. Returning to
//! `Idle` is tied to a drop guard, so it also happens when the submitting
//! future is cancelled.

use crate::ports::advice::AdvicePort;
use crate::ports::chat_observer::{ChatObserver, NoChatObserver};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use guide_domain::util::truncate_str;
use guide_domain::{ChatMessage, ChatState, Transcript};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was appended or sent
    Empty,
    /// A reply is still pending; nothing was appended or sent
    Busy,
    /// The question and its reply were appended
    Answered {
        question: ChatMessage,
        reply: ChatMessage,
    },
    /// The reply arrived after the session was dropped
    Discarded,
}

impl SubmitOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, SubmitOutcome::Answered { .. })
    }
}

#[derive(Debug)]
struct SessionState {
    transcript: Transcript,
    state: ChatState,
    draft: String,
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Interactive conversation with the AI guide
pub struct ChatSession {
    state: Arc<Mutex<SessionState>>,
    advice: Arc<dyn AdvicePort>,
    observer: Arc<dyn ChatObserver>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatSession {
    /// New session whose transcript opens with the guide's greeting
    pub fn new(advice: Arc<dyn AdvicePort>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                transcript: Transcript::with_greeting(),
                state: ChatState::Idle,
                draft: String::new(),
            })),
            advice,
            observer: Arc::new(NoChatObserver),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Replace the initial transcript
    pub fn with_transcript(self, transcript: Transcript) -> Self {
        lock(&self.state).transcript = transcript;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ChatObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    // ==================== Queries ====================

    pub fn state(&self) -> ChatState {
        lock(&self.state).state
    }

    pub fn is_busy(&self) -> bool {
        self.state().is_busy()
    }

    /// Snapshot of the transcript
    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.state).transcript.messages().to_vec()
    }

    pub fn last_message(&self) -> Option<ChatMessage> {
        lock(&self.state).transcript.last().cloned()
    }

    pub fn message_count(&self) -> usize {
        lock(&self.state).transcript.len()
    }

    // ==================== Draft ====================

    pub fn set_draft(&self, text: impl Into<String>) {
        lock(&self.state).draft = text.into();
    }

    pub fn draft(&self) -> String {
        lock(&self.state).draft.clone()
    }

    /// Whether submitting the current draft would be accepted
    pub fn can_submit(&self) -> bool {
        let guard = lock(&self.state);
        !guard.state.is_busy() && !guard.draft.trim().is_empty()
    }

    /// Submit the current draft. The draft is cleared only when accepted.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let draft = self.draft();
        self.submit(&draft).await
    }

    // ==================== Submission ====================

    /// Submit `raw` and wait for the reply.
    ///
    /// `raw` is stored verbatim; trimming is only used to reject blank input.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let (question, in_flight) = match self.begin(raw) {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };

        let reply = self.advice.request_advice(raw).await;

        match in_flight.complete(reply) {
            Some(reply) => SubmitOutcome::Answered { question, reply },
            None => SubmitOutcome::Discarded,
        }
    }

    /// Submit `raw` on a background task.
    ///
    /// Acceptance is decided immediately: `Err` carries `Empty` or `Busy`.
    /// The task only holds a weak reference to the session; if the session
    /// is dropped before the reply arrives the reply is discarded.
    pub fn spawn_submit(&self, raw: impl Into<String>) -> Result<JoinHandle<SubmitOutcome>, SubmitOutcome> {
        let raw = raw.into();
        let (question, in_flight) = self.begin(&raw)?;
        let advice = Arc::clone(&self.advice);

        Ok(tokio::spawn(async move {
            let reply = advice.request_advice(&raw).await;
            match in_flight.complete(reply) {
                Some(reply) => SubmitOutcome::Answered { question, reply },
                None => SubmitOutcome::Discarded,
            }
        }))
    }

    /// Validate, append the question and switch to `Sending`
    fn begin(&self, raw: &str) -> Result<(ChatMessage, InFlight), SubmitOutcome> {
        if raw.trim().is_empty() {
            return Err(SubmitOutcome::Empty);
        }

        let question = {
            let mut guard = lock(&self.state);
            if guard.state.is_busy() {
                debug!("Submission rejected: a reply is still pending");
                return Err(SubmitOutcome::Busy);
            }
            let question = guard.transcript.push_user(raw).clone();
            guard.state = ChatState::Sending;
            guard.draft.clear();
            question
        };

        info!("Question submitted: {}", truncate_str(raw, 100));
        log_message(self.conversation_logger.as_ref(), "user_message", &question);
        self.observer.on_message_appended(&question);
        self.observer.on_state_changed(ChatState::Sending);

        let in_flight = InFlight {
            state: Arc::downgrade(&self.state),
            completed: false,
            observer: Arc::clone(&self.observer),
            conversation_logger: Arc::clone(&self.conversation_logger),
        };
        Ok((question, in_flight))
    }
}

fn log_message(logger: &dyn ConversationLogger, event_type: &'static str, message: &ChatMessage) {
    logger.log(ConversationEvent::new(
        event_type,
        serde_json::json!({
            "id": message.id().value(),
            "role": message.role().as_str(),
            "text": message.text(),
        }),
    ));
}

/// A pending request. Completing it appends the reply; dropping it
/// without completing puts the session back to `Idle`.
struct InFlight {
    state: Weak<Mutex<SessionState>>,
    completed: bool,
    observer: Arc<dyn ChatObserver>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl InFlight {
    /// Append the reply. `None` if the session no longer exists.
    fn complete(mut self, reply: String) -> Option<ChatMessage> {
        self.completed = true;
        let Some(state) = self.state.upgrade() else {
            debug!("Session dropped before the reply arrived; discarding reply");
            return None;
        };

        let message = {
            let mut guard = lock(&state);
            let message = guard.transcript.push_assistant(reply).clone();
            guard.state = ChatState::Idle;
            message
        };

        log_message(self.conversation_logger.as_ref(), "assistant_message", &message);
        self.observer.on_message_appended(&message);
        self.observer.on_state_changed(ChatState::Idle);
        Some(message)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        let Some(state) = self.state.upgrade() else {
            return;
        };
        lock(&state).state = ChatState::Idle;
        debug!("Pending request abandoned; session back to idle");
        self.observer.on_state_changed(ChatState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{GatewayError, GenerateRequest, LlmGateway};
    use crate::use_cases::request_advice::RequestAdviceUseCase;
    use async_trait::async_trait;
    use guide_domain::{FallbackReply, GREETING, Role};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Replies `reply:<question>` after an optional delay
    struct EchoAdvice {
        calls: AtomicUsize,
        delay: Option<Duration>,
    }

    impl EchoAdvice {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay: None,
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay: Some(delay),
            }
        }
    }

    #[async_trait]
    impl AdvicePort for EchoAdvice {
        async fn request_advice(&self, message: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            format!("reply:{}", message)
        }
    }

    /// Blocks until released
    struct GatedAdvice {
        calls: AtomicUsize,
        release: Notify,
    }

    impl GatedAdvice {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl AdvicePort for GatedAdvice {
        async fn request_advice(&self, _message: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            "released".to_string()
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl LlmGateway for FailingGateway {
        fn model_name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _request: &GenerateRequest<'_>) -> Result<String, GatewayError> {
            Err(GatewayError::RequestFailed("HTTP 503".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl ChatObserver for RecordingObserver {
        fn on_message_appended(&self, message: &ChatMessage) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{}:{}", message.role(), message.text()));
        }

        fn on_state_changed(&self, state: ChatState) {
            self.events.lock().unwrap().push(format!("{:?}", state));
        }
    }

    fn transcript_lines(session: &ChatSession) -> Vec<String> {
        session
            .messages()
            .iter()
            .map(|m| format!("{}:{}", m.role(), m.text()))
            .collect()
    }

    async fn wait_for_calls(counter: &AtomicUsize, expected: usize) {
        while counter.load(Ordering::SeqCst) < expected {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_new_session_starts_with_greeting() {
        let session = ChatSession::new(Arc::new(EchoAdvice::new()));
        assert_eq!(session.message_count(), 1);
        let greeting = session.last_message().unwrap();
        assert_eq!(greeting.role(), Role::Assistant);
        assert_eq!(greeting.text(), GREETING);
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[tokio::test]
    async fn test_sequential_submissions_keep_order() {
        let session = ChatSession::new(Arc::new(EchoAdvice::new()))
            .with_transcript(Transcript::new());

        assert!(session.submit("a").await.is_answered());
        assert!(session.submit("b").await.is_answered());

        assert_eq!(
            transcript_lines(&session),
            vec!["user:a", "assistant:reply:a", "user:b", "assistant:reply:b"]
        );
        let ids: Vec<u64> = session.messages().iter().map(|m| m.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[tokio::test]
    async fn test_blank_input_rejected_without_call() {
        let advice = Arc::new(EchoAdvice::new());
        let session = ChatSession::new(advice.clone());

        assert_eq!(session.submit("").await, SubmitOutcome::Empty);
        assert_eq!(session.submit("   ").await, SubmitOutcome::Empty);
        assert_eq!(session.submit("\n\t").await, SubmitOutcome::Empty);

        assert_eq!(session.message_count(), 1);
        assert_eq!(advice.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_text_stored_verbatim() {
        let session = ChatSession::new(Arc::new(EchoAdvice::new()));
        let outcome = session.submit("  tram tickets?  ").await;

        let SubmitOutcome::Answered { question, reply } = outcome else {
            panic!("expected an answer");
        };
        assert_eq!(question.text(), "  tram tickets?  ");
        assert_eq!(reply.text(), "reply:  tram tickets?  ");
        assert!(question.id() < reply.id());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_submit_is_rejected_while_sending() {
        let advice = Arc::new(EchoAdvice::slow(Duration::from_millis(50)));
        let session = ChatSession::new(advice.clone());

        let (first, second) = tokio::join!(session.submit("a"), session.submit("b"));

        assert!(first.is_answered());
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(advice.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            transcript_lines(&session)[1..],
            ["user:a".to_string(), "assistant:reply:a".to_string()]
        );
    }

    #[tokio::test]
    async fn test_spawned_submission_gates_further_input() {
        let advice = Arc::new(GatedAdvice::new());
        let session = ChatSession::new(advice.clone());

        let handle = session.spawn_submit("first").unwrap();
        assert!(session.is_busy());
        assert_eq!(session.submit("second").await, SubmitOutcome::Busy);
        assert!(matches!(
            session.spawn_submit("third"),
            Err(SubmitOutcome::Busy)
        ));

        wait_for_calls(&advice.calls, 1).await;
        advice.release.notify_one();
        let outcome = handle.await.unwrap();

        assert!(outcome.is_answered());
        assert_eq!(advice.calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.message_count(), 3);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_failure_appends_apology_and_returns_idle() {
        let advice = Arc::new(RequestAdviceUseCase::new(Some(Arc::new(FailingGateway))));
        let session = ChatSession::new(advice);

        let outcome = session.submit("Where can I drink?").await;

        assert!(outcome.is_answered());
        let replies: Vec<_> = session
            .messages()
            .into_iter()
            .filter(|m| m.role() == Role::Assistant)
            .skip(1)
            .collect();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].text(), FallbackReply::RequestFailed.text());
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[tokio::test]
    async fn test_missing_credential_reply() {
        let session = ChatSession::new(Arc::new(RequestAdviceUseCase::unavailable()));
        session.submit("hello").await;
        assert_eq!(
            session.last_message().unwrap().text(),
            FallbackReply::NoCredential.text()
        );
    }

    #[tokio::test]
    async fn test_reply_discarded_after_session_dropped() {
        let advice = Arc::new(GatedAdvice::new());
        let session = ChatSession::new(advice.clone());

        let handle = session.spawn_submit("anyone there?").unwrap();
        wait_for_calls(&advice.calls, 1).await;
        drop(session);
        advice.release.notify_one();

        assert_eq!(handle.await.unwrap(), SubmitOutcome::Discarded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submission_returns_to_idle() {
        let advice = Arc::new(GatedAdvice::new());
        let session = ChatSession::new(advice.clone());

        let result =
            tokio::time::timeout(Duration::from_millis(10), session.submit("hello?")).await;

        assert!(result.is_err());
        assert_eq!(session.state(), ChatState::Idle);
        // The question stays; the transcript is append-only.
        assert_eq!(session.message_count(), 2);
    }

    #[tokio::test]
    async fn test_draft_cleared_only_when_accepted() {
        let advice = Arc::new(GatedAdvice::new());
        let session = ChatSession::new(advice.clone());

        session.set_draft("   ");
        assert!(!session.can_submit());

        session.set_draft("Is kratom legal?");
        assert!(session.can_submit());
        let handle = session.spawn_submit(session.draft()).unwrap();
        assert_eq!(session.draft(), "");

        session.set_draft("follow-up");
        assert!(!session.can_submit());
        assert_eq!(session.submit_draft().await, SubmitOutcome::Busy);
        assert_eq!(session.draft(), "follow-up");

        wait_for_calls(&advice.calls, 1).await;
        advice.release.notify_one();
        handle.await.unwrap();
        assert!(session.can_submit());
    }

    #[tokio::test]
    async fn test_observer_sees_messages_and_states_in_order() {
        let observer = Arc::new(RecordingObserver::default());
        let session = ChatSession::new(Arc::new(EchoAdvice::new())).with_observer(observer.clone());

        session.submit("a").await;

        assert_eq!(
            *observer.events.lock().unwrap(),
            vec!["user:a", "Sending", "assistant:reply:a", "Idle"]
        );
    }
}
