//! # medbot-service
//!
//! The service layer of MedBot: everything the adapters need beyond the
//! router itself.
//!
//! - **Service boundary**: `gen_ai_service` builds the single-shot and
//!   streaming handlers from an `ExecutionContext`; `MockContext` stands in
//!   for the serverless request context.
//! - **Sessions**: `open_session` wires a responder to a fresh in-memory
//!   transcript.
//! - **Triage scenarios**: five fixed patient messages for a quick preview.
//! - **Self check**: the service-boundary smoke test behind `medbot self-check`.
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod context;
pub mod scenarios;
pub mod selfcheck;
pub mod service;
pub mod session;

pub use context::MockContext;
pub use service::{
    authenticate, gen_ai_service, interface_of, GenerateFn, GenerateStreamFn, ResponseStream,
    ServiceParams,
};
pub use session::open_session;
