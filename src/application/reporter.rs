//! Aggregation of batch results and persistence of the valid subset.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::models::ValidationResult;

/// Extract the valid keys from a batch, preserving input order.
pub fn valid_keys(results: &[ValidationResult]) -> Vec<String> {
    results
        .iter()
        .filter(|result| result.is_valid())
        .map(|result| result.key.clone())
        .collect()
}

/// Write valid keys to `path`, one per line, truncating prior content.
///
/// Callers must skip this entirely for an empty batch: a run with zero valid
/// keys leaves any existing file untouched.
pub fn persist_valid_keys(path: &Path, valid: &[String]) -> std::io::Result<()> {
    let mut contents = String::with_capacity(valid.iter().map(|k| k.len() + 1).sum());
    for key in valid {
        contents.push_str(key);
        contents.push('\n');
    }
    fs::write(path, contents)?;
    info!("saved {} valid keys to {}", valid.len(), path.display());
    Ok(())
}
