//! Alterego Data Models
//!
//! - Chat: one conversation turn over HTTP
//! - Persona: the loaded identity

mod chat;
mod persona;

pub use chat::*;
pub use persona::*;
