//! Chat session - the visible history kept on the client side
//!
//! The server is stateless; every request carries the turns so far.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Slash commands understood by the interactive loop
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Message(&'a str),
    Reset,
    Exit,
    Empty,
}

impl<'a> Line<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Line::Empty,
            "/reset" => Line::Reset,
            "/exit" | "/quit" => Line::Exit,
            text => Line::Message(text),
        }
    }
}

#[derive(Debug, Default)]
pub struct ChatSession {
    history: Vec<HistoryEntry>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Record a completed exchange. Failed requests are never recorded.
    pub fn record(&mut self, message: &str, reply: &str) {
        self.history.push(HistoryEntry::user(message));
        self.history.push(HistoryEntry::assistant(reply));
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Number of completed exchanges
    pub fn turns(&self) -> usize {
        self.history.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(Line::parse("  /reset "), Line::Reset);
        assert_eq!(Line::parse("/exit"), Line::Exit);
        assert_eq!(Line::parse("/quit"), Line::Exit);
        assert_eq!(Line::parse("   "), Line::Empty);
        assert_eq!(Line::parse(" hi there "), Line::Message("hi there"));
    }

    #[test]
    fn test_record_and_reset() {
        let mut session = ChatSession::new();
        session.record("Hi", "Hello!");
        session.record("Where do you work?", "At a startup.");

        assert_eq!(session.turns(), 2);
        assert_eq!(session.history()[0], HistoryEntry::user("Hi"));
        assert_eq!(session.history()[3], HistoryEntry::assistant("At a startup."));

        session.reset();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_history_serializes_as_chat_turns() {
        let entry = HistoryEntry::assistant("Hello!");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["content"], "Hello!");
    }
}
