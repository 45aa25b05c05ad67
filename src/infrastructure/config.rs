//! Configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::{default_rules, ClassificationRule};

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid concurrency: {0}. Must be between 1 and 100")]
    InvalidConcurrency(usize),

    #[error("Invalid timeout: {0}. Must be positive")]
    InvalidTimeout(u64),

    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("Output file path cannot be empty")]
    EmptyOutputFile,

    #[error("Classification rule {0} has an empty pattern")]
    EmptyRulePattern(usize),
}

/// Runtime configuration for a check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of concurrent validation requests.
    pub concurrency: usize,
    /// Base URL of the provider API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Path of the file receiving valid keys.
    pub output_file: String,
    /// Ordered failure-message classification rules.
    pub rules: Vec<ClassificationRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: 5,
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 30,
            output_file: "valid_api_keys.txt".to_string(),
            rules: default_rules(),
        }
    }
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. keycheck.yaml in the working directory (optional)
    /// 3. Environment variables (KEYCHECK_* prefix, highest priority)
    ///
    /// CLI flags are applied on top of the loaded config by the caller,
    /// which re-validates afterwards.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("keycheck.yaml"))
            .merge(Env::prefixed("KEYCHECK_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.concurrency == 0 || config.concurrency > 100 {
            return Err(ConfigError::InvalidConcurrency(config.concurrency));
        }

        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }

        if config.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        if config.output_file.is_empty() {
            return Err(ConfigError::EmptyOutputFile);
        }

        for (index, rule) in config.rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(ConfigError::EmptyRulePattern(index));
            }
        }

        Ok(())
    }
}
