//! # medbot-web
//!
//! Browser demo for MedBot. Serves a static chat page at `/`, answers
//! `POST /chat` from the keyword catalog and reports liveness on `/health`.
//!
//! The router is loaded once and shared read-only; every chat request gets a
//! fresh session whose transcript is dropped when the request completes.

pub mod context;
pub mod routes;

pub use context::RequestContext;
pub use routes::{build_router, AppState, DEFAULT_SERVICE_NAME};
