use crate::client::{AnswerBackend, ChatResult};
use crate::types::Message;

pub const FALLBACK_ANSWER: &str = "Sorry, I could not get an answer.";
pub const ERROR_REPLY: &str = "Error contacting server.";

/// State behind the floating chat widget.
///
/// Sending is split in two so a UI can hold the state in a signal and run the
/// request in a spawned task: [`begin_send`](Self::begin_send) before the
/// request, [`finish_send`](Self::finish_send) with its outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    pub open: bool,
    pub messages: Vec<Message>,
    pub input: String,
    pub loading: bool,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit control is enabled whenever no request is pending.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Move the pending input into the conversation and mark a request as in
    /// flight. Returns the question to send, or `None` when the input is blank
    /// or a request is already pending.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }

        let question = std::mem::take(&mut self.input);
        self.messages.push(Message::user(question.clone()));
        self.loading = true;
        Some(question)
    }

    /// Append the bot's reply for a finished request and release the loading
    /// flag, whatever the outcome.
    pub fn finish_send(&mut self, outcome: ChatResult<Option<String>>) {
        let reply = match outcome {
            Ok(Some(answer)) => answer,
            Ok(None) => FALLBACK_ANSWER.to_string(),
            Err(err) => {
                tracing::error!(error = %err, "chat request failed");
                ERROR_REPLY.to_string()
            }
        };
        self.messages.push(Message::bot(reply));
        self.loading = false;
    }

    /// Run a full send against `backend`. Returns whether a request was made.
    pub async fn send<B>(&mut self, backend: &B) -> bool
    where
        B: AnswerBackend + ?Sized,
    {
        let Some(question) = self.begin_send() else {
            return false;
        };
        let outcome = backend.ask(&question).await;
        self.finish_send(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ChatError;
    use crate::types::Sender;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Answer(&'static str),
        Missing,
        Fail,
    }

    struct FakeBackend {
        reply: Reply,
        questions: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                questions: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.questions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AnswerBackend for FakeBackend {
        async fn ask(&self, question: &str) -> ChatResult<Option<String>> {
            self.questions.lock().unwrap().push(question.to_string());
            match self.reply {
                Reply::Answer(text) => Ok(Some(text.to_string())),
                Reply::Missing => Ok(None),
                Reply::Fail => Err(ChatError::EmptyBody),
            }
        }
    }

    fn with_input(text: &str) -> WidgetState {
        let mut state = WidgetState::new();
        state.set_input(text);
        state
    }

    #[test]
    fn starts_closed_and_idle() {
        let state = WidgetState::new();
        assert!(!state.open);
        assert!(!state.loading);
        assert!(state.messages.is_empty());
        assert!(state.can_submit());
    }

    #[test]
    fn even_toggles_return_to_closed() {
        let mut state = WidgetState::new();
        state.toggle();
        assert!(state.open);
        state.toggle();
        assert!(!state.open);
        for _ in 0..6 {
            state.toggle();
        }
        assert!(!state.open);
    }

    #[tokio::test]
    async fn blank_input_sends_nothing() {
        let backend = FakeBackend::new(Reply::Answer("unused"));
        for blank in ["", "   ", "\t\n"] {
            let mut state = with_input(blank);
            assert!(!state.send(&backend).await);
            assert!(state.messages.is_empty());
            assert!(!state.loading);
        }
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn answer_is_appended_once() {
        let backend = FakeBackend::new(Reply::Answer("X"));
        let mut state = with_input("what is X?");

        assert!(state.send(&backend).await);

        assert_eq!(
            state.messages,
            vec![Message::user("what is X?"), Message::bot("X")]
        );
        let bots = state
            .messages
            .iter()
            .filter(|msg| msg.sender == Sender::Bot)
            .count();
        assert_eq!(bots, 1);
        assert_eq!(backend.calls(), vec!["what is X?".to_string()]);
        assert!(!state.loading);
        assert!(state.input.is_empty());
    }

    #[tokio::test]
    async fn question_is_sent_as_typed() {
        let backend = FakeBackend::new(Reply::Answer("ok"));
        let mut state = with_input("  padded  ");
        state.send(&backend).await;
        assert_eq!(backend.calls(), vec!["  padded  ".to_string()]);
        assert_eq!(state.messages[0].text, "  padded  ");
    }

    #[tokio::test]
    async fn missing_answer_uses_fallback() {
        let backend = FakeBackend::new(Reply::Missing);
        let mut state = with_input("hello");
        state.send(&backend).await;
        assert_eq!(state.messages.last(), Some(&Message::bot(FALLBACK_ANSWER)));
        assert!(!state.loading);
        assert!(state.input.is_empty());
    }

    #[tokio::test]
    async fn failure_appends_error_and_reenables_submit() {
        let backend = FakeBackend::new(Reply::Fail);
        let mut state = with_input("hello");
        state.send(&backend).await;
        assert_eq!(state.messages.last(), Some(&Message::bot(ERROR_REPLY)));
        assert!(!state.loading);
        assert!(state.can_submit());
        assert!(state.input.is_empty());
    }

    #[test]
    fn begin_send_marks_loading_and_clears_input() {
        let mut state = with_input("first");
        assert_eq!(state.begin_send().as_deref(), Some("first"));
        assert!(state.loading);
        assert!(!state.can_submit());
        assert!(state.input.is_empty());
        assert_eq!(state.messages, vec![Message::user("first")]);
    }

    #[test]
    fn second_send_while_loading_is_refused() {
        let mut state = with_input("first");
        state.begin_send();
        state.set_input("second");

        assert_eq!(state.begin_send(), None);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.input, "second");

        state.finish_send(Ok(Some("reply".into())));
        assert_eq!(state.begin_send().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn conversation_keeps_order() {
        let backend = FakeBackend::new(Reply::Answer("a"));
        let mut state = WidgetState::new();
        for question in ["one", "two"] {
            state.set_input(question);
            state.send(&backend).await;
        }
        let senders: Vec<Sender> = state.messages.iter().map(|msg| msg.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]
        );
        assert_eq!(state.messages[2].text, "two");
    }
}
