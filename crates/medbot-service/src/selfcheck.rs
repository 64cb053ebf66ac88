//! Service-boundary self check.
//!
//! Exercises `gen_ai_service` the way a deployment smoke test would:
//! construct it from a mock context, call both handlers, and confirm an
//! unauthenticated context is refused.  Nothing leaves the process.

use tracing::warn;

use medbot_catalog::KeywordRouter;
use medbot_contracts::{
    error::{MedbotError, MedbotResult},
    message::{ChatPayload, Message, Role},
};
use medbot_core::traits::{ExecutionContext, Responder};

use crate::{
    context::MockContext,
    service::{gen_ai_service, ServiceParams},
};

/// Outcome of one named check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn from_outcome(name: &'static str, outcome: MedbotResult<String>) -> Self {
        match outcome {
            Ok(detail) => Self { name, passed: true, detail },
            Err(e) => {
                warn!(check = name, error = %e, "self check failed");
                Self { name, passed: false, detail: e.to_string() }
            }
        }
    }
}

/// Run every check against `params`.  Checks are independent; one failing
/// does not stop the rest.
pub fn run_self_check(params: &ServiceParams) -> Vec<CheckResult> {
    vec![
        CheckResult::from_outcome("service construction", check_construction(params)),
        CheckResult::from_outcome("single-shot generation", check_generate(params)),
        CheckResult::from_outcome("streaming generation", check_stream(params)),
        CheckResult::from_outcome("message conversion", check_message_conversion()),
        CheckResult::from_outcome("token required", check_token_required(params)),
    ]
}

fn failed(reason: impl Into<String>) -> MedbotError {
    MedbotError::ConfigError { reason: reason.into() }
}

fn check_construction(params: &ServiceParams) -> MedbotResult<String> {
    let context = MockContext::new();
    let (_generate, _generate_stream) = gen_ai_service(&context, params)?;
    Ok("returned generate and generate_stream handlers".to_string())
}

fn check_generate(params: &ServiceParams) -> MedbotResult<String> {
    let context = MockContext::new();
    let (generate, _) = gen_ai_service(&context, params)?;

    let reply = generate(&context)?;
    if reply.role() != Role::Assistant {
        return Err(failed(format!("reply role was '{}'", reply.role())));
    }

    let router = KeywordRouter::load(params.catalog_path.as_deref())?;
    let question = context.get_json();
    let expected = question
        .last_user_message()
        .map(|m| router.route(m.content()))
        .ok_or(MedbotError::EmptyConversation)?;
    if reply.content() != expected {
        return Err(failed("reply does not match the catalog answer"));
    }

    Ok(format!("{} characters from the catalog", reply.content().len()))
}

fn check_stream(params: &ServiceParams) -> MedbotResult<String> {
    let context = MockContext::new();
    let (generate, generate_stream) = gen_ai_service(&context, params)?;

    let whole = generate(&context)?;
    let chunks: Vec<String> = generate_stream(&context)?.collect();
    if chunks.concat() != whole.content() {
        return Err(failed("streamed chunks do not reassemble to the single-shot reply"));
    }

    Ok(format!("{} chunks reassembled", chunks.len()))
}

fn check_message_conversion() -> MedbotResult<String> {
    let payload = ChatPayload::new(vec![Message::user("Hello"), Message::assistant("Hi there!")]);

    let json = serde_json::to_string(&payload).map_err(|e| failed(e.to_string()))?;
    let decoded: ChatPayload = serde_json::from_str(&json).map_err(|e| failed(e.to_string()))?;
    if decoded != payload {
        return Err(failed("payload changed across JSON conversion"));
    }

    Ok(format!("{} messages kept their roles", decoded.messages.len()))
}

fn check_token_required(params: &ServiceParams) -> MedbotResult<String> {
    let context = MockContext::new().with_token("");
    match gen_ai_service(&context, params) {
        Err(MedbotError::Authentication { .. }) => Ok("empty token rejected".to_string()),
        Err(other) => Err(other),
        Ok(_) => Err(failed("service accepted an empty token")),
    }
}
