//! Value Objects
//!
//! Immutable value types.

mod delivery_status;
mod tool_kind;

pub use delivery_status::*;
pub use tool_kind::*;
