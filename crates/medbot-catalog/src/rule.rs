//! Response rule types and catalog configuration schema.
//!
//! A `CatalogConfig` is deserialized from TOML and holds an ordered list of
//! `ResponseRule`s plus a fallback reply.  Rules are evaluated in declaration
//! order: the first matching rule wins.  If no rule matches, the fallback is
//! returned.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single keyword rule loaded from TOML.
///
/// A rule matches when any of its `keywords` occurs as a substring of the
/// lowercased user message.  Whole-word boundaries are not considered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRule {
    /// Stable identifier used in logs and scenario output.
    pub id: String,

    /// Human-readable note on what the rule covers.
    #[serde(default)]
    pub description: String,

    /// Lowercase substrings that trigger this rule.
    pub keywords: Vec<String>,

    /// The canned reply, Markdown formatted.
    pub response: String,
}

impl ResponseRule {
    /// Return true if any keyword occurs in `normalized`.
    ///
    /// `normalized` must already be lowercased; keywords are lowercased when
    /// the catalog is loaded.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// The top-level structure deserialized from a TOML catalog file.
///
/// Example:
/// ```toml
/// fallback = "Tell me more about how you feel."
///
/// [[rules]]
/// id = "fever"
/// keywords = ["fever", "temperature"]
/// response = "Stay hydrated and rest."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Reply used when no rule matches.
    pub fallback: String,

    /// Ordered list of rules.  First match wins.
    #[serde(default)]
    pub rules: Vec<ResponseRule>,
}

impl CatalogConfig {
    /// Lowercase and trim every keyword in place.
    pub fn normalize(&mut self) {
        for rule in &mut self.rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.trim().to_lowercase();
            }
        }
    }

    /// Check the catalog for problems that would break routing.
    ///
    /// Collects every problem rather than stopping at the first, so a broken
    /// catalog file can be fixed in one pass.  An empty result means the
    /// catalog is usable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.fallback.trim().is_empty() {
            problems.push("fallback response is empty".to_string());
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.id.as_str()) {
                problems.push(format!("duplicate rule id '{}'", rule.id));
            }
            if rule.keywords.is_empty() {
                problems.push(format!("rule '{}' has no keywords", rule.id));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                problems.push(format!("rule '{}' has a blank keyword", rule.id));
            }
            if rule.response.trim().is_empty() {
                problems.push(format!("rule '{}' has an empty response", rule.id));
            }
        }

        problems
    }
}
