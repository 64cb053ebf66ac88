//! The chat session: one conversation driven turn by turn.
//!
//! Every adapter runs the same sequence per turn:
//!
//!   input → Responder::route → append(user) → append(assistant) → reply
//!
//! The responder is stateless and shared; the transcript belongs to the
//! session and is dropped with it.

use std::sync::Arc;

use tracing::debug;

use medbot_contracts::{
    error::MedbotResult,
    message::{Message, Role},
    session::SessionId,
};

use crate::traits::{Responder, TranscriptStore};

/// Drives one conversation against a shared responder.
///
/// Construct one session per console run, per HTTP request, or per test.
pub struct ChatSession {
    session_id: SessionId,
    responder: Arc<dyn Responder>,
    transcript: Box<dyn TranscriptStore>,
}

impl ChatSession {
    pub fn new(
        session_id: SessionId,
        responder: Arc<dyn Responder>,
        transcript: Box<dyn TranscriptStore>,
    ) -> Self {
        Self { session_id, responder, transcript }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Answer one user message and record both sides of the exchange.
    ///
    /// # Errors
    ///
    /// Returns `MedbotError::TranscriptWriteFailed` if the store rejects a
    /// write. Routing itself cannot fail.
    pub fn turn(&self, input: &str) -> MedbotResult<String> {
        let reply = self.responder.route(input).to_string();

        self.transcript.append(Role::User, input)?;
        self.transcript.append(Role::Assistant, &reply)?;

        debug!(
            session_id = %self.session_id,
            input_len = input.len(),
            reply_len = reply.len(),
            "turn recorded"
        );

        Ok(reply)
    }

    /// The conversation so far, oldest message first.
    pub fn history(&self) -> MedbotResult<Vec<Message>> {
        self.transcript.all()
    }
}
