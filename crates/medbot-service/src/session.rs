//! Session wiring shared by every adapter.

use std::sync::Arc;

use tracing::info;

use medbot_contracts::session::SessionId;
use medbot_core::{traits::Responder, ChatSession};
use medbot_transcript::InMemoryTranscript;

/// Open a fresh session against `responder`.
///
/// Returns the session together with a handle on its transcript, so the
/// caller can export the conversation once the session is done.
pub fn open_session(responder: Arc<dyn Responder>) -> (ChatSession, InMemoryTranscript) {
    let session_id = SessionId::new();
    let transcript = InMemoryTranscript::new(session_id.clone());

    info!(session_id = %session_id, "chat session opened");

    let session = ChatSession::new(session_id, responder, Box::new(transcript.clone()));
    (session, transcript)
}
