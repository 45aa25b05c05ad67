//! Bounded-concurrency fan-out over a key validator.
//!
//! Uses the semaphore-bounded spawn pattern: every key gets its own task,
//! but at most `concurrency` validation calls are in flight at once. Join
//! handles are awaited in submission order, so the result vector matches
//! the input order regardless of completion order.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::models::{mask_key, KeyStatus, ValidationResult};
use crate::domain::ports::KeyValidator;

/// Check every key with at most `concurrency` requests in flight.
///
/// A failing call never aborts the batch; a panicked task is folded into an
/// [`KeyStatus::Error`] result for that key.
pub async fn check_all(
    validator: Arc<dyn KeyValidator>,
    keys: Vec<String>,
    concurrency: usize,
) -> Vec<ValidationResult> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    let handles: Vec<_> = keys
        .iter()
        .map(|key| {
            let key = key.clone();
            let validator = Arc::clone(&validator);
            let semaphore = Arc::clone(&semaphore);
            tokio::spawn(async move {
                match semaphore.acquire().await {
                    Ok(_permit) => {
                        debug!("checking key {}", mask_key(&key));
                        let status = validator.validate(&key).await;
                        ValidationResult::new(key, status)
                    }
                    // Unreachable while we hold a clone of the semaphore,
                    // but a closed semaphore must not take the batch down.
                    Err(_) => ValidationResult::new(
                        key,
                        KeyStatus::Error("worker pool closed".to_string()),
                    ),
                }
            })
        })
        .collect();

    let joined = join_all(handles).await;

    keys.into_iter()
        .zip(joined)
        .map(|(key, outcome)| match outcome {
            Ok(result) => result,
            Err(err) => ValidationResult::new(key, KeyStatus::Error(format!("task failed: {}", err))),
        })
        .collect()
}
