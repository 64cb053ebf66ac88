//! In-memory implementation of `TranscriptStore`.
//!
//! `InMemoryTranscript` keeps all entries in a `Vec` protected by a `Mutex`,
//! making it safe to hand to a `ChatSession` while the adapter keeps a clone
//! for exporting the conversation afterwards.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::debug;

use medbot_contracts::{
    error::{MedbotError, MedbotResult},
    message::{Message, Role},
    session::SessionId,
};
use medbot_core::traits::TranscriptStore;

use crate::entry::{TranscriptEntry, TranscriptLog};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct InMemoryState {
    /// All entries written so far, in append order.
    pub(crate) entries: Vec<TranscriptEntry>,

    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,
}

// ── Public store ──────────────────────────────────────────────────────────────

/// An append-only conversation transcript held in memory.
///
/// Clones share the same underlying transcript.  The transcript lives as long
/// as the last clone; nothing is written to disk.
#[derive(Clone)]
pub struct InMemoryTranscript {
    session_id: SessionId,
    pub(crate) state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryTranscript {
    /// Create an empty transcript for the given session.
    pub fn new(session_id: SessionId) -> Self {
        let state = InMemoryState {
            entries: Vec::new(),
            sequence: 0,
        };
        Self {
            session_id,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Number of messages recorded.  A poisoned lock reads as empty.
    pub fn len(&self) -> usize {
        self.state.lock().map(|s| s.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot every entry written so far.
    pub fn export_log(&self) -> MedbotResult<TranscriptLog> {
        let state = self.lock()?;
        Ok(TranscriptLog {
            session_id: self.session_id.to_string(),
            entries: state.entries.clone(),
            exported_at: Utc::now(),
        })
    }

    fn lock(&self) -> MedbotResult<std::sync::MutexGuard<'_, InMemoryState>> {
        self.state.lock().map_err(|e| MedbotError::TranscriptWriteFailed {
            reason: format!("transcript lock poisoned: {}", e),
        })
    }
}

// ── TranscriptStore impl ──────────────────────────────────────────────────────

impl TranscriptStore for InMemoryTranscript {
    /// Wrap the message in a `TranscriptEntry` and push it.
    ///
    /// Returns `Err(TranscriptWriteFailed)` only if the internal mutex is
    /// poisoned.
    fn append(&self, role: Role, content: &str) -> MedbotResult<()> {
        let mut state = self.lock()?;

        let sequence = state.sequence;
        state.entries.push(TranscriptEntry {
            sequence,
            message: Message::new(role, content),
            recorded_at: Utc::now(),
        });
        state.sequence += 1;

        debug!(
            session_id = %self.session_id,
            sequence,
            role = %role,
            "message appended to transcript"
        );

        Ok(())
    }

    fn all(&self) -> MedbotResult<Vec<Message>> {
        let state = self.lock()?;
        Ok(state.entries.iter().map(|e| e.message.clone()).collect())
    }
}
