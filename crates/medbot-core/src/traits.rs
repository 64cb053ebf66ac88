//! Core trait definitions for MedBot.
//!
//! These three traits are the seams between the pieces of the system:
//!
//! - `Responder`        : maps user text to exactly one reply (the router)
//! - `TranscriptStore`  : append-only record of a conversation
//! - `ExecutionContext` : what the hosted AI service reads from a request
//!
//! Adapters depend on the traits, never on the concrete implementations, so
//! the console, the self-check harness and the web server share one code path.

use std::collections::BTreeMap;

use medbot_contracts::{
    error::MedbotResult,
    message::{ChatPayload, Message, Role},
};

/// Produces the reply for a single user message.
///
/// Implementations must be total and side-effect free: every input,
/// including the empty string, yields exactly one non-empty reply. History
/// is never consulted.
pub trait Responder: Send + Sync {
    fn route(&self, input: &str) -> &str;
}

/// The transcript of one conversation session.
///
/// Append is the only mutator. Messages are never edited or removed, and
/// `all()` returns them in the order they were appended.
pub trait TranscriptStore: Send + Sync {
    /// Record one message at the end of the transcript.
    fn append(&self, role: Role, content: &str) -> MedbotResult<()>;

    /// Every message recorded so far, oldest first.
    fn all(&self) -> MedbotResult<Vec<Message>>;
}

/// The request context the hosted AI service is invoked with.
///
/// The production deployment receives one of these from its serverless
/// runtime. Here it is implemented by `MockContext` for tests and by the web
/// adapter for live HTTP requests.
pub trait ExecutionContext: Send + Sync {
    /// Mint a fresh bearer token for the downstream service.
    fn generate_token(&self) -> String;

    /// The bearer token attached to the current request.
    fn get_token(&self) -> String;

    /// The conversation payload of the current request.
    fn get_json(&self) -> ChatPayload;

    /// Request headers, keyed by header name.
    fn get_headers(&self) -> BTreeMap<String, String>;
}
