//! Domain models for key checking.
//!
//! The status taxonomy is a closed set: a key is either usable, or it failed
//! for one of a small number of recognizable reasons, or it failed with an
//! unrecognized message that is carried through verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome category for a single API key check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStatus {
    /// The key authenticated successfully.
    Valid,
    /// The provider rejected the key as unknown or malformed.
    InvalidKey,
    /// The key is recognized but its account has no remaining quota.
    NoCredits,
    /// The provider throttled the request.
    RateLimited,
    /// Any other failure, carrying the original message.
    Error(String),
}

impl KeyStatus {
    /// Whether this status marks the key as usable.
    pub fn is_valid(&self) -> bool {
        matches!(self, KeyStatus::Valid)
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyStatus::Valid => write!(f, "Valid"),
            KeyStatus::InvalidKey => write!(f, "Invalid key"),
            KeyStatus::NoCredits => write!(f, "No credits"),
            KeyStatus::RateLimited => write!(f, "Rate limited"),
            KeyStatus::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

/// The outcome of checking one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The key exactly as collected (unmasked).
    pub key: String,
    /// Classified outcome of the check.
    pub status: KeyStatus,
}

impl ValidationResult {
    /// Create a result for `key` with the given status.
    pub fn new(key: impl Into<String>, status: KeyStatus) -> Self {
        Self {
            key: key.into(),
            status,
        }
    }

    /// Whether the underlying key was classified as usable.
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}

/// A single substring-match rule mapping a failure message to a status.
///
/// Rules are data rather than code so the matched phrases can be adjusted
/// in configuration when the provider rewords its error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Case-insensitive substring to look for in the failure message.
    pub pattern: String,
    /// Status assigned when the pattern matches.
    pub status: KeyStatus,
}

impl ClassificationRule {
    /// Create a rule matching `pattern` (case-insensitively) to `status`.
    pub fn new(pattern: impl Into<String>, status: KeyStatus) -> Self {
        Self {
            pattern: pattern.into(),
            status,
        }
    }
}

/// The built-in rule set, matching the provider's current error wording.
pub fn default_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::new("invalid api key", KeyStatus::InvalidKey),
        ClassificationRule::new("exceeded your current quota", KeyStatus::NoCredits),
        ClassificationRule::new("rate limit", KeyStatus::RateLimited),
    ]
}

/// Classify a failure message against an ordered rule set.
///
/// Rules are evaluated top-down and the first match wins. An unmatched
/// message falls through to [`KeyStatus::Error`] carrying the original
/// (non-lowercased) text.
pub fn classify(message: &str, rules: &[ClassificationRule]) -> KeyStatus {
    let lowered = message.to_lowercase();
    for rule in rules {
        if lowered.contains(&rule.pattern.to_lowercase()) {
            return rule.status.clone();
        }
    }
    KeyStatus::Error(message.to_string())
}

/// Mask a key for display: the first 8 and last 4 characters are shown with
/// the middle elided. Keys of 12 characters or fewer are returned unchanged.
///
/// Operates on characters rather than bytes so multi-byte input cannot
/// split a UTF-8 boundary.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return key.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
