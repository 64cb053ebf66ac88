//! # medbot-transcript
//!
//! Append-only, in-memory conversation transcript for MedBot.
//!
//! ## Overview
//!
//! Every message a session records is wrapped in a `TranscriptEntry` with
//! its sequence number and timestamp.  There is no edit or delete operation;
//! the transcript disappears when the session that owns it ends.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medbot_transcript::InMemoryTranscript;
//! use medbot_core::traits::TranscriptStore;
//!
//! let transcript = InMemoryTranscript::new(SessionId::new());
//! transcript.append(Role::User, "I have a headache")?;
//! let log = transcript.export_log()?;
//! ```

pub mod entry;
pub mod memory;

pub use entry::{TranscriptEntry, TranscriptLog};
pub use memory::InMemoryTranscript;

// ── Tests ─────────────────────────────────────────────────────────────────────
