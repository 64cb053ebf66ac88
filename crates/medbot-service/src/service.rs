//! The AI-service constructor.
//!
//! `gen_ai_service` has the same shape as the hosted deployment's entry
//! point: it takes the request context, checks it can authenticate, and
//! hands back a single-shot handler and a streaming handler.  Here both
//! handlers answer from the keyword catalog instead of a hosted model, so no
//! network call is ever made.

use std::{path::PathBuf, sync::Arc};

use tracing::{debug, info};

use medbot_catalog::KeywordRouter;
use medbot_contracts::{
    error::{MedbotError, MedbotResult},
    message::Message,
};
use medbot_core::traits::{ExecutionContext, Responder};

use crate::context::INTERFACE_HEADER;

/// Answers the latest user message of a context in one piece.
pub type GenerateFn = Box<dyn Fn(&dyn ExecutionContext) -> MedbotResult<Message> + Send + Sync>;

/// Answers the latest user message of a context as a stream of text chunks.
pub type GenerateStreamFn =
    Box<dyn Fn(&dyn ExecutionContext) -> MedbotResult<ResponseStream> + Send + Sync>;

/// Construction options for `gen_ai_service`.
#[derive(Debug, Clone)]
pub struct ServiceParams {
    /// Catalog file to answer from; the builtin catalog when `None`.
    pub catalog_path: Option<PathBuf>,

    /// Whitespace-delimited pieces per streamed chunk.  Must be at least 1.
    pub chunk_words: usize,
}

impl Default for ServiceParams {
    fn default() -> Self {
        Self {
            catalog_path: None,
            chunk_words: 4,
        }
    }
}

/// A finite stream of reply chunks.
///
/// Concatenating every chunk yields the exact reply `generate` would return,
/// whitespace included.
#[derive(Debug)]
pub struct ResponseStream {
    chunks: std::vec::IntoIter<String>,
}

impl ResponseStream {
    fn new(text: &str, chunk_words: usize) -> Self {
        let pieces: Vec<&str> = text.split_inclusive(char::is_whitespace).collect();
        let chunks: Vec<String> = pieces
            .chunks(chunk_words.max(1))
            .map(|group| group.concat())
            .collect();
        Self {
            chunks: chunks.into_iter(),
        }
    }
}

impl Iterator for ResponseStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.chunks.next()
    }
}

/// Build the generate / generate-stream handler pair for `context`.
///
/// # Errors
///
/// - `Authentication` if the context yields an empty token, even after
///   asking it to generate a fresh one.
/// - `ConfigError` if `params.chunk_words` is 0 or the catalog fails to load.
pub fn gen_ai_service(
    context: &dyn ExecutionContext,
    params: &ServiceParams,
) -> MedbotResult<(GenerateFn, GenerateStreamFn)> {
    authenticate(context)?;

    if params.chunk_words == 0 {
        return Err(MedbotError::ConfigError {
            reason: "chunk_words must be at least 1".to_string(),
        });
    }

    let interface = interface_of(context);

    let router = Arc::new(KeywordRouter::load(params.catalog_path.as_deref())?);

    info!(
        interface = %interface,
        rule_count = router.rules().len(),
        "ai service handlers constructed"
    );

    let generate_router = Arc::clone(&router);
    let generate: GenerateFn =
        Box::new(move |ctx: &dyn ExecutionContext| -> MedbotResult<Message> {
            let reply = answer(&generate_router, ctx)?;
            Ok(Message::assistant(reply))
        });

    let chunk_words = params.chunk_words;
    let generate_stream: GenerateStreamFn =
        Box::new(move |ctx: &dyn ExecutionContext| -> MedbotResult<ResponseStream> {
            let reply = answer(&router, ctx)?;
            Ok(ResponseStream::new(&reply, chunk_words))
        });

    Ok((generate, generate_stream))
}

/// The bearer token `context` authenticates with.
///
/// Falls back to `generate_token()` when `get_token()` is blank.
///
/// # Errors
///
/// `Authentication` if both are blank.
pub fn authenticate(context: &dyn ExecutionContext) -> MedbotResult<String> {
    let mut token = context.get_token();
    if token.trim().is_empty() {
        token = context.generate_token();
    }
    if token.trim().is_empty() {
        return Err(MedbotError::Authentication {
            reason: "execution context supplied an empty token".to_string(),
        });
    }
    Ok(token)
}

/// The value of the interface header, matched case-insensitively, or
/// `"unspecified"`.
pub fn interface_of(context: &dyn ExecutionContext) -> String {
    context
        .get_headers()
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(INTERFACE_HEADER))
        .map(|(_, value)| value)
        .unwrap_or_else(|| "unspecified".to_string())
}

fn answer(router: &KeywordRouter, ctx: &dyn ExecutionContext) -> MedbotResult<String> {
    let payload = ctx.get_json();
    let last = payload
        .last_user_message()
        .ok_or(MedbotError::EmptyConversation)?;

    debug!(
        message_count = payload.messages.len(),
        "answering latest user message"
    );

    Ok(router.route(last.content()).to_string())
}
