//! Domain Errors
//!
//! Error types for domain operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Domain layer errors
///
/// Only `ResourceMissing`, `InvalidDocument` and `Configuration` are allowed to stop the
/// process, and only at startup. Everything else is contained to the current turn.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Required resource is missing: {}", path.display())]
    ResourceMissing { path: PathBuf },

    #[error("Document {} could not be read: {reason}", path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Language model API error: {0}")]
    ModelApi(String),

    #[error("Tool execution failed: {0}")]
    ToolExecution(String),

    #[error("Notification failed: {0}")]
    Notification(String),

    #[error("Conversation did not settle after {rounds} tool rounds")]
    ConversationDeadlock { rounds: usize },
}

impl DomainError {
    pub fn resource_missing<P: AsRef<Path>>(path: P) -> Self {
        Self::ResourceMissing {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn invalid_document<P: AsRef<Path>, T: ToString>(path: P, reason: T) -> Self {
        Self::InvalidDocument {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error must prevent the process from serving traffic
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ResourceMissing { .. } | Self::InvalidDocument { .. } | Self::Configuration(_)
        )
    }
}
