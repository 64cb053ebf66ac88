//! Execution context for a live HTTP request.

use std::collections::BTreeMap;

use axum::http::{header::AUTHORIZATION, HeaderMap};

use medbot_contracts::message::{ChatPayload, Message};
use medbot_core::traits::ExecutionContext;
use medbot_service::MockContext;

/// The context of one `POST /chat` request.
///
/// A request without an `Authorization` header runs under the fixed demo
/// token. A request that sends the header must carry a non-blank bearer
/// token; anything else leaves the token empty and fails authentication.
/// The payload is the single posted message.
#[derive(Debug, Clone)]
pub struct RequestContext {
    token: String,
    message: String,
    headers: BTreeMap<String, String>,
}

impl RequestContext {
    pub fn from_parts(headers: &HeaderMap, message: String) -> Self {
        let token = match headers.get(AUTHORIZATION) {
            None => MockContext::DEFAULT_TOKEN.to_string(),
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(|t| t.trim().to_string())
                .unwrap_or_default(),
        };

        // Non-UTF-8 header values are dropped.
        let headers = headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        Self {
            token,
            message,
            headers,
        }
    }
}

impl ExecutionContext for RequestContext {
    // A live request cannot mint credentials of its own.
    fn generate_token(&self) -> String {
        String::new()
    }

    fn get_token(&self) -> String {
        self.token.clone()
    }

    fn get_json(&self) -> ChatPayload {
        ChatPayload::new(vec![Message::user(self.message.clone())])
    }

    fn get_headers(&self) -> BTreeMap<String, String> {
        self.headers.clone()
    }
}
