//! OpenAI API client used to probe key validity.
//!
//! Issues a single authenticated `GET /v1/models` request per key and folds
//! the outcome into a [`KeyStatus`] via the configured classification rules.
//! There is no retry logic: one failed probe is final for that key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{classify, default_rules, ClassificationRule, KeyStatus};
use crate::domain::ports::KeyValidator;

/// Configuration for the OpenAI client.
#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    /// API base URL. Default: `https://api.openai.com`.
    pub base_url: String,
    /// Request timeout in seconds. Default: 30.
    pub timeout_secs: u64,
    /// Ordered failure-message classification rules.
    pub rules: Vec<ClassificationRule>,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 30,
            rules: default_rules(),
        }
    }
}

/// HTTP client probing key validity against the models listing endpoint.
pub struct OpenAiClient {
    config: OpenAiClientConfig,
    client: Client,
}

impl OpenAiClient {
    /// Create a new client.
    pub fn new(config: OpenAiClientConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::ValidationFailed(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> DomainResult<Self> {
        Self::new(OpenAiClientConfig::default())
    }

    /// Issue the models listing probe, returning the failure message on error.
    async fn list_models(&self, api_key: &str) -> Result<(), String> {
        let url = format!("{}/v1/models", self.config.base_url);

        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();

        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error body".to_string());

        Err(format!("API error {}: {}", status, body))
    }
}

#[async_trait]
impl KeyValidator for OpenAiClient {
    async fn validate(&self, api_key: &str) -> KeyStatus {
        match self.list_models(api_key.trim()).await {
            Ok(()) => KeyStatus::Valid,
            Err(message) => classify(&message, &self.config.rules),
        }
    }
}
