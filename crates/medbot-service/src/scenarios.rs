//! Fixed triage scenarios.
//!
//! Five representative patient messages, run through the router so an
//! operator can eyeball which rule answers each one.  All text is fictional.

use medbot_catalog::KeywordRouter;
use medbot_core::traits::Responder;

/// Characters of each reply shown in a scenario preview.
pub const PREVIEW_CHARS: usize = 200;

/// The patient messages exercised by `run_triage_cases`, in display order.
pub const TRIAGE_CASES: [&str; 5] = [
    "Hello, I need help with my symptoms",
    "I have a high fever and sore throat",
    "I've been having severe headaches for 3 days",
    "My throat hurts when I swallow",
    "I feel nauseous and have stomach pain",
];

/// What the router did with one scenario message.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub input: &'static str,
    /// Id of the rule that answered, or `None` for the fallback.
    pub rule_id: Option<String>,
    /// The first `PREVIEW_CHARS` characters of the reply.
    pub preview: String,
    /// True when the reply was cut to build the preview.
    pub truncated: bool,
}

/// Route every message in `TRIAGE_CASES`.
pub fn run_triage_cases(router: &KeywordRouter) -> Vec<ScenarioOutcome> {
    TRIAGE_CASES
        .iter()
        .map(|&input| {
            let reply = router.route(input);
            ScenarioOutcome {
                input,
                rule_id: router.route_rule(input).map(|r| r.id.clone()),
                preview: reply.chars().take(PREVIEW_CHARS).collect(),
                truncated: reply.chars().count() > PREVIEW_CHARS,
            }
        })
        .collect()
}
