//! Service Ports
//!
//! Abstract interfaces for external services.

mod llm_provider;
mod notifier;

pub use llm_provider::*;
pub use notifier::*;
