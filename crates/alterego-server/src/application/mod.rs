//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the language model, the tools and the notifier.

mod context_loader;
mod conversation_service;
mod prompt;
mod tool_registry;

pub use context_loader::ContextLoader;
pub use conversation_service::{ConversationConfig, ConversationService};
pub use tool_registry::ToolRegistry;

#[cfg(test)]
pub use conversation_service::MODEL_UNAVAILABLE_REPLY;
