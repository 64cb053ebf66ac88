//! HTTP routes for the browser demo.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use medbot_catalog::KeywordRouter;
use medbot_contracts::{
    error::{MedbotError, MedbotResult},
    message::Message,
};
use medbot_core::traits::ExecutionContext;
use medbot_service::{authenticate, interface_of, open_session};

use crate::context::RequestContext;

/// Name reported by `GET /health` unless overridden.
pub const DEFAULT_SERVICE_NAME: &str = "MedBot Test Interface";

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared, read-only state. Each request opens its own session.
pub struct AppState {
    pub router: Arc<KeywordRouter>,
    pub service_name: String,
}

impl AppState {
    pub fn new(router: KeywordRouter, service_name: impl Into<String>) -> Self {
        Self {
            router: Arc::new(router),
            service_name: service_name.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Always answers 200; failures become an apology in the `response` field.
async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<ChatResponse> {
    let response = match answer(&state, &headers, &body) {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "chat request failed");
            format!("Sorry, I encountered an error: {e}")
        }
    };
    Json(ChatResponse { response })
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service_name.clone(),
    })
}

fn answer(state: &AppState, headers: &HeaderMap, body: &[u8]) -> MedbotResult<String> {
    let request: ChatRequest =
        serde_json::from_slice(body).map_err(|e| MedbotError::MalformedRequest {
            reason: e.to_string(),
        })?;

    let ctx = RequestContext::from_parts(headers, request.message);
    authenticate(&ctx)?;

    let payload = ctx.get_json();
    let input = payload
        .last_user_message()
        .map(Message::content)
        .unwrap_or_default();

    let (session, transcript) = open_session(state.router.clone());
    let reply = session.turn(input)?;

    debug!(
        session_id = %session.session_id(),
        interface = %interface_of(&ctx),
        recorded = transcript.len(),
        "chat request answered"
    );
    Ok(reply)
}
