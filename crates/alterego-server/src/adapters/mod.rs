//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod documents;
pub mod openai;
pub mod pushover;

// Re-exports
pub use openai::OpenAiProvider;
pub use pushover::{DisabledNotifier, PushoverNotifier};
