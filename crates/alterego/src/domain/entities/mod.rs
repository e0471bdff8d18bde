//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - PersonaContext: Who the assistant speaks for
//! - Message: Conversation history entry
//! - ToolCall / ToolResult / ToolDefinition: Model-requested actions
//! - NotificationEvent: Side-channel alert
//! - TurnOutcome: Result of one conversation turn

mod message;
mod notification;
mod persona;
mod tool;
mod turn;

pub use message::*;
pub use notification::*;
pub use persona::*;
pub use tool::*;
pub use turn::*;
