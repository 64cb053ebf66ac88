//! # medbot-contracts
//!
//! Shared types and errors for the MedBot symptom assistant.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod error;
pub mod message;
pub mod session;

#[cfg(test)]
mod tests {
    use super::*;
    use error::MedbotError;
    use message::{ChatPayload, Message, Role};
    use session::SessionId;

    // ── Message ──────────────────────────────────────────────────────────────

    #[test]
    fn message_constructors_set_role() {
        let user = Message::user("I have a headache");
        let bot = Message::assistant("Sorry to hear that");

        assert_eq!(user.role(), Role::User);
        assert_eq!(user.content(), "I have a headache");
        assert_eq!(bot.role(), Role::Assistant);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);

        let decoded: Message =
            serde_json::from_str(r#"{"role":"assistant","content":"ok"}"#).unwrap();
        assert_eq!(decoded.role(), Role::Assistant);
    }

    #[test]
    fn role_display_matches_wire_name() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    // ── ChatPayload ──────────────────────────────────────────────────────────

    #[test]
    fn payload_last_user_message_skips_assistant_turns() {
        let payload = ChatPayload::new(vec![
            Message::user("first"),
            Message::assistant("reply"),
            Message::user("second"),
            Message::assistant("another reply"),
        ]);

        let last = payload.last_user_message().unwrap();
        assert_eq!(last.content(), "second");
    }

    #[test]
    fn payload_without_user_message_has_none() {
        let payload = ChatPayload::new(vec![Message::assistant("hello")]);
        assert!(payload.last_user_message().is_none());
        assert!(ChatPayload::default().last_user_message().is_none());
    }

    #[test]
    fn payload_missing_messages_field_defaults_empty() {
        let payload: ChatPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.messages.is_empty());
    }

    // ── SessionId ────────────────────────────────────────────────────────────

    #[test]
    fn session_id_new_produces_unique_values() {
        let unique: std::collections::HashSet<String> =
            (0..50).map(|_| SessionId::new().to_string()).collect();
        assert_eq!(unique.len(), 50);
    }

    // ── MedbotError display messages ─────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = MedbotError::ConfigError {
            reason: "fallback response is empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("fallback response is empty"));
    }

    #[test]
    fn error_authentication_display() {
        let err = MedbotError::Authentication {
            reason: "token is empty".to_string(),
        };
        assert!(err.to_string().contains("token is empty"));
    }

    #[test]
    fn error_empty_conversation_display() {
        let msg = MedbotError::EmptyConversation.to_string();
        assert!(msg.contains("no user message"));
    }

    #[test]
    fn error_malformed_request_display() {
        let err = MedbotError::MalformedRequest {
            reason: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("malformed request"));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn error_transcript_write_failed_display() {
        let err = MedbotError::TranscriptWriteFailed {
            reason: "lock poisoned".to_string(),
        };
        assert!(err.to_string().contains("transcript write failed"));
    }

    #[test]
    fn error_io_converts_from_std() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: MedbotError = io.into();
        assert!(matches!(err, MedbotError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }
}
