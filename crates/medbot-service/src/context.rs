//! Stand-in execution context for the hosted AI service.
//!
//! Everything here is hardcoded.  `MockContext` replaces the request context
//! the serverless runtime would hand to the service in production, so the
//! service boundary can be exercised without credentials or network access.

use std::collections::BTreeMap;

use medbot_contracts::message::{ChatPayload, Message};
use medbot_core::traits::ExecutionContext;

/// The interface header the hosted assistant expects on every request.
pub const INTERFACE_HEADER: &str = "X-Ai-Interface";

/// A fixed-token, fixed-header execution context.
///
/// Defaults to token `"test-token-123"` and a single user message reporting
/// a sore throat and fever.
#[derive(Debug, Clone)]
pub struct MockContext {
    token: String,
    messages: Vec<Message>,
    headers: BTreeMap<String, String>,
}

impl MockContext {
    pub const DEFAULT_TOKEN: &'static str = "test-token-123";

    pub fn new() -> Self {
        Self::with_messages(vec![Message::user(
            "Hello, I have a sore throat and fever. Can you help?",
        )])
    }

    /// A context carrying the given conversation and the default token.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(INTERFACE_HEADER.to_string(), "assistant".to_string());
        Self {
            token: Self::DEFAULT_TOKEN.to_string(),
            messages,
            headers,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }
}

impl Default for MockContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionContext for MockContext {
    fn generate_token(&self) -> String {
        self.token.clone()
    }

    fn get_token(&self) -> String {
        self.token.clone()
    }

    fn get_json(&self) -> ChatPayload {
        ChatPayload::new(self.messages.clone())
    }

    fn get_headers(&self) -> BTreeMap<String, String> {
        self.headers.clone()
    }
}
