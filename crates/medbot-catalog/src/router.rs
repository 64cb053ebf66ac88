//! TOML-driven keyword router.
//!
//! `KeywordRouter` loads a `CatalogConfig` from a TOML string or file and
//! implements the `Responder` trait from medbot-core.
//!
//! Routing algorithm:
//!
//! 1. Lowercase the input (matching only; replies are returned verbatim).
//! 2. Iterate rules in declaration order.
//! 3. Return the response of the first rule with a keyword that occurs as a
//!    substring of the lowercased input.
//! 4. If no rule matched, return the fallback.

use std::path::Path;

use tracing::debug;

use medbot_contracts::error::{MedbotError, MedbotResult};
use medbot_core::traits::Responder;

use crate::rule::{CatalogConfig, ResponseRule};

/// The catalog compiled into the binaries.
const BUILTIN_CATALOG: &str = include_str!("../catalog/medbot.toml");

/// A `Responder` that answers from a static keyword catalog.
///
/// Construct via `builtin`, `from_toml_str` or `from_file`, then share it
/// behind an `Arc` for the life of the process.
///
/// ```rust,ignore
/// use medbot_catalog::KeywordRouter;
///
/// let router = KeywordRouter::builtin()?;
/// assert!(router.route("I have a fever").contains("fever"));
/// ```
#[derive(Debug)]
pub struct KeywordRouter {
    config: CatalogConfig,
}

impl KeywordRouter {
    /// Build a router from an already-parsed catalog.
    ///
    /// Keywords are normalized to lowercase first.  Returns
    /// `MedbotError::ConfigError` listing every problem if the catalog fails
    /// validation.
    pub fn from_config(mut config: CatalogConfig) -> MedbotResult<Self> {
        config.normalize();

        let problems = config.problems();
        if !problems.is_empty() {
            return Err(MedbotError::ConfigError {
                reason: format!("invalid response catalog: {}", problems.join("; ")),
            });
        }

        debug!(rule_count = config.rules.len(), "response catalog loaded");
        Ok(Self { config })
    }

    /// Parse `s` as TOML and build a `KeywordRouter`.
    ///
    /// Returns `MedbotError::ConfigError` if the TOML is malformed, does not
    /// match `CatalogConfig`, or fails validation.
    pub fn from_toml_str(s: &str) -> MedbotResult<Self> {
        let config: CatalogConfig = toml::from_str(s).map_err(|e| MedbotError::ConfigError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> MedbotResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedbotError::ConfigError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The canonical catalog shipped with MedBot.
    pub fn builtin() -> MedbotResult<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load `path` if given, otherwise the builtin catalog.
    pub fn load(path: Option<&Path>) -> MedbotResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Self::builtin(),
        }
    }

    /// The first rule matching `input`, or `None` when the fallback applies.
    pub fn route_rule(&self, input: &str) -> Option<&ResponseRule> {
        let normalized = input.to_lowercase();
        self.config.rules.iter().find(|rule| rule.matches(&normalized))
    }

    pub fn fallback(&self) -> &str {
        &self.config.fallback
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.config.rules
    }
}

impl Responder for KeywordRouter {
    fn route(&self, input: &str) -> &str {
        match self.route_rule(input) {
            Some(rule) => {
                debug!(rule_id = %rule.id, "keyword rule matched");
                &rule.response
            }
            None => {
                debug!("no keyword rule matched; using fallback");
                &self.config.fallback
            }
        }
    }
}
