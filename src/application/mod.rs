//! Application layer: input collection, bounded fan-out, and persistence.

pub mod collector;
pub mod reporter;
pub mod runner;

pub use collector::{collect_keys, Collected};
pub use reporter::{persist_valid_keys, valid_keys};
pub use runner::check_all;
