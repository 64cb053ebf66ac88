//! # medbot-catalog
//!
//! The response catalog and keyword router for MedBot.
//!
//! ## Overview
//!
//! This crate provides [`KeywordRouter`], which implements the
//! [`Responder`](medbot_core::traits::Responder) trait.  Rules are declared
//! in a TOML catalog, evaluated in order, and the first match wins.  If no
//! rule matches, the catalog's fallback reply is returned, so every input
//! gets exactly one answer.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medbot_catalog::KeywordRouter;
//! use medbot_core::traits::Responder;
//!
//! let router = KeywordRouter::builtin()?;
//! let reply = router.route("my head hurts");
//! ```
//!
//! ## Keyword matching
//!
//! Matching is a case-insensitive substring test.  Rule order is the
//! tie-break and encodes triage priority: a message mentioning both fever
//! and a sore throat gets the fever reply.

pub mod router;
pub mod rule;

pub use router::KeywordRouter;
pub use rule::{CatalogConfig, ResponseRule};

// ── Tests ─────────────────────────────────────────────────────────────────────
