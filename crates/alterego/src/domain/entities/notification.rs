//! NotificationEvent - Side-channel alert raised by a tool

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An alert for the persona's owner. Not persisted; handed straight to a notifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NotificationEvent {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// A visitor left contact details
    pub fn contact(email: &str, name: &str, notes: &str) -> Self {
        Self::new(
            "New contact",
            format!("Recording {name} with email {email} and notes {notes}"),
        )
    }

    /// The assistant could not answer a question
    pub fn unknown_question(question: &str) -> Self {
        Self::new("Unanswered question", format!("Recording {question}"))
    }
}
