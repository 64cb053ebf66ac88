//! # medbot-core
//!
//! The seam traits and the session driver for MedBot.
//!
//! This crate provides:
//! - The three core traits (`Responder`, `TranscriptStore`, `ExecutionContext`)
//! - `ChatSession`, which wires a responder and a transcript together
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medbot_core::{ChatSession, traits::{Responder, TranscriptStore}};
//! ```

pub mod session;
pub mod traits;

pub use session::ChatSession;

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use medbot_contracts::{
        error::{MedbotError, MedbotResult},
        message::{Message, Role},
        session::SessionId,
    };

    use crate::{
        session::ChatSession,
        traits::{Responder, TranscriptStore},
    };

    // ── Mock implementations ──────────────────────────────────────────────────

    /// Echoes "reply" for any input containing "ping", "fallback" otherwise,
    /// and counts how often it was consulted.
    struct MockResponder {
        calls: Arc<Mutex<u32>>,
    }

    impl Responder for MockResponder {
        fn route(&self, input: &str) -> &str {
            *self.calls.lock().unwrap() += 1;
            if input.contains("ping") {
                "reply"
            } else {
                "fallback"
            }
        }
    }

    struct MockTranscript {
        messages: Arc<Mutex<Vec<Message>>>,
        fail: bool,
    }

    impl MockTranscript {
        fn new() -> Self {
            Self { messages: Arc::new(Mutex::new(Vec::new())), fail: false }
        }
    }

    impl TranscriptStore for MockTranscript {
        fn append(&self, role: Role, content: &str) -> MedbotResult<()> {
            if self.fail {
                return Err(MedbotError::TranscriptWriteFailed {
                    reason: "store offline".to_string(),
                });
            }
            self.messages.lock().unwrap().push(Message::new(role, content));
            Ok(())
        }

        fn all(&self) -> MedbotResult<Vec<Message>> {
            Ok(self.messages.lock().unwrap().clone())
        }
    }

    fn make_session(transcript: MockTranscript) -> (ChatSession, Arc<Mutex<u32>>) {
        let calls = Arc::new(Mutex::new(0));
        let responder = MockResponder { calls: calls.clone() };
        let session = ChatSession::new(SessionId::new(), Arc::new(responder), Box::new(transcript));
        (session, calls)
    }

    // ── Test cases ────────────────────────────────────────────────────────────

    #[test]
    fn test_turn_returns_responder_reply() {
        let (session, calls) = make_session(MockTranscript::new());

        assert_eq!(session.turn("ping").unwrap(), "reply");
        assert_eq!(session.turn("something else").unwrap(), "fallback");
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    /// Each turn appends the user message then the reply, in that order.
    #[test]
    fn test_turn_records_both_sides_in_order() {
        let transcript = MockTranscript::new();
        let messages = transcript.messages.clone();
        let (session, _) = make_session(transcript);

        session.turn("ping one").unwrap();
        session.turn("two").unwrap();

        let recorded = messages.lock().unwrap();
        assert_eq!(recorded.len(), 4);
        assert_eq!(recorded[0], Message::user("ping one"));
        assert_eq!(recorded[1], Message::assistant("reply"));
        assert_eq!(recorded[2], Message::user("two"));
        assert_eq!(recorded[3], Message::assistant("fallback"));
    }

    #[test]
    fn test_history_reads_through_to_store() {
        let (session, _) = make_session(MockTranscript::new());
        session.turn("ping").unwrap();

        let history = session.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role(), Role::User);
        assert_eq!(history[1].role(), Role::Assistant);
    }

    #[test]
    fn test_transcript_failure_surfaces_as_error() {
        let mut transcript = MockTranscript::new();
        transcript.fail = true;
        let (session, _) = make_session(transcript);

        match session.turn("ping") {
            Err(MedbotError::TranscriptWriteFailed { reason }) => {
                assert!(reason.contains("store offline"));
            }
            other => panic!("expected TranscriptWriteFailed, got {:?}", other),
        }
    }
}
