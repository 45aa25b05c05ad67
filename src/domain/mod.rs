//! Domain layer: status model, classification rules, and ports.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
pub use models::{classify, default_rules, mask_key, ClassificationRule, KeyStatus, ValidationResult};
pub use ports::KeyValidator;
