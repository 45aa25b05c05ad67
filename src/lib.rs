//! Keycheck - Parallel API Key Validator
//!
//! Keycheck validates a batch of OpenAI-style API keys by issuing one
//! lightweight authenticated request per key, classifying each outcome,
//! and persisting the valid subset to a flat file.
//!
//! # Architecture
//!
//! The crate follows a layered layout:
//!
//! - **Domain Layer** (`domain`): Status model, classification rules, ports
//! - **Application Layer** (`application`): Collection, bounded fan-out, persistence
//! - **Infrastructure Layer** (`infrastructure`): Configuration and the HTTP client
//! - **CLI Layer** (`cli`): Command-line interface and output formatting
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use keycheck::{application::runner, OpenAiClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(OpenAiClient::with_defaults()?);
//!     let results = runner::check_all(client, vec!["sk-...".into()], 5).await;
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    classify, default_rules, mask_key, ClassificationRule, KeyStatus, ValidationResult,
};
pub use domain::ports::KeyValidator;
pub use infrastructure::config::{Config, ConfigError, ConfigLoader};
pub use infrastructure::openai::{OpenAiClient, OpenAiClientConfig};
