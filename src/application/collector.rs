//! Key collection from line-oriented input.
//!
//! Reads one key per line until a blank line or end-of-input. Lines are
//! trimmed; only lines with the `sk-` prefix are accepted, everything else
//! is recorded as skipped so the caller can report it.

use std::io::BufRead;

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};

/// Outcome of a collection pass over the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    /// Accepted keys, in input order.
    pub keys: Vec<String>,
    /// Rejected (non-`sk-`) lines, in input order.
    pub skipped: Vec<String>,
}

impl Collected {
    /// Whether no structurally valid key was collected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Collect keys from `reader` until a blank line or end-of-input.
///
/// End-of-input before *any* line was read is a fatal
/// [`DomainError::InputTerminated`]; after at least one line it behaves like
/// the blank-line terminator.
pub fn collect_keys(reader: impl BufRead) -> DomainResult<Collected> {
    let mut collected = Collected::default();
    let mut saw_line = false;

    for line in reader.lines() {
        let line = line?;
        saw_line = true;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(collected);
        }

        if trimmed.starts_with("sk-") {
            collected.keys.push(trimmed.to_string());
        } else {
            debug!("rejected input line ({} chars)", trimmed.chars().count());
            collected.skipped.push(trimmed.to_string());
        }
    }

    if !saw_line {
        return Err(DomainError::InputTerminated);
    }
    Ok(collected)
}
