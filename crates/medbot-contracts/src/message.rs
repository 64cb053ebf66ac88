//! Conversation message types.
//!
//! These types define the data flowing between the adapters, the router and
//! the transcript. They are intentionally minimal: a message is a role and
//! some text, nothing more.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who authored a message.
///
/// Serialized lowercase (`"user"`, `"assistant"`) so payloads match the
/// chat-completion shape the hosted service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// A single conversation turn.
///
/// Fields are private so a message cannot be edited after construction;
/// use the accessors to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Construct a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The JSON body an execution context hands to the service handlers.
///
/// Mirrors the `{"messages": [...]}` request shape of the hosted LLM service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl ChatPayload {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// The most recent message authored by the user, if any.
    pub fn last_user_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role() == Role::User)
    }
}
