//! Ports (trait seams) between the application layer and external services.

use async_trait::async_trait;

use crate::domain::models::KeyStatus;

/// A validator that can check a single API key against a remote provider.
///
/// Implementations issue exactly one probe per call and never fail: every
/// outcome, including transport errors, is folded into a [`KeyStatus`].
#[async_trait]
pub trait KeyValidator: Send + Sync {
    /// Check one key and classify the outcome.
    async fn validate(&self, api_key: &str) -> KeyStatus;
}
