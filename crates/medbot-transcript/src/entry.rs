//! Transcript entry and log types.
//!
//! `TranscriptEntry` wraps a `Message` with its position in the conversation
//! and the time it was recorded.  `TranscriptLog` is the snapshot produced
//! when a session's transcript is exported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medbot_contracts::message::Message;

/// A single recorded message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Position in the transcript, starting at 0.
    pub sequence: u64,

    /// The message as it was appended.
    pub message: Message,

    /// Wall-clock time (UTC) the message was appended.
    pub recorded_at: DateTime<Utc>,
}

/// A snapshot of one session's transcript.
///
/// Produced by `InMemoryTranscript::export_log()`; serializes to JSON for the
/// console's `--show-transcript` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptLog {
    /// The session whose conversation is recorded here.
    pub session_id: String,

    /// All entries in append order (sequence 0 first).
    pub entries: Vec<TranscriptEntry>,

    /// Wall-clock time (UTC) the snapshot was taken.
    pub exported_at: DateTime<Utc>,
}

impl TranscriptLog {
    /// Render the log as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
