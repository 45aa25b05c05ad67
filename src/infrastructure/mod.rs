//! Infrastructure layer: configuration and external service adapters.

pub mod config;
pub mod openai;

pub use config::{Config, ConfigError, ConfigLoader};
pub use openai::{OpenAiClient, OpenAiClientConfig};
