//! Chat - Request/Response DTOs for a conversation turn

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use alterego::Message;

/// Who said a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One visible entry of the chat history, as a chat UI keeps it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl From<&ChatTurn> for Message {
    fn from(turn: &ChatTurn) -> Self {
        match turn.role {
            ChatRole::User => Message::user(&turn.content),
            ChatRole::Assistant => Message::assistant(&turn.content),
        }
    }
}

/// Chat request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The new user message
    pub message: String,
    /// Earlier turns of this session, oldest first
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

impl ChatRequest {
    /// Domain history: earlier turns followed by the new user message
    pub fn to_messages(&self) -> Vec<Message> {
        self.history
            .iter()
            .map(Message::from)
            .chain(std::iter::once(Message::user(&self.message)))
            .collect()
    }
}

/// Chat response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
    /// Tool names the model invoked while producing the reply
    pub tools_invoked: Vec<String>,
}
