//! Error types shared by every MedBot crate.
//!
//! All fallible operations return `MedbotResult<T>`. Routing itself never
//! fails; errors come from loading configuration, the service boundary, and
//! adapter I/O.

use thiserror::Error;

/// The unified error type for MedBot.
#[derive(Debug, Error)]
pub enum MedbotError {
    /// A catalog or runtime option is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The execution context could not supply a usable token.
    #[error("authentication failed: {reason}")]
    Authentication { reason: String },

    /// The conversation payload holds no user message to answer.
    #[error("conversation contains no user message")]
    EmptyConversation,

    /// An adapter received input it could not decode.
    #[error("malformed request: {reason}")]
    MalformedRequest { reason: String },

    /// The transcript store could not record a message.
    #[error("transcript write failed: {reason}")]
    TranscriptWriteFailed { reason: String },

    /// Reading from or writing to a console or socket failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the MedBot crates.
pub type MedbotResult<T> = Result<T, MedbotError>;
