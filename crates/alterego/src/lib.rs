//! Alterego Domain Library
//!
//! Core domain types and interfaces for a persona chat assistant: a bot that
//! answers questions as a specific person, grounded in their profile documents.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (PersonaContext, Message, ToolCall, NotificationEvent)
//!   - `value_objects/`: Immutable value types (ToolKind, DeliveryStatus)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Language model and notifier interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use alterego::domain::{Message, PersonaContext};
//! use alterego::ports::{LlmProvider, Notifier};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DeliveryStatus, DomainError, Message, MessageRole, NotificationEvent, PersonaContext,
    ProfileDocument, ToolCall, ToolDefinition, ToolKind, ToolResult, TurnOutcome, TurnState,
};
pub use ports::{
    CompletionOptions, CompletionResponse, FinishReason, LlmProvider, Notifier, TokenUsage,
};
