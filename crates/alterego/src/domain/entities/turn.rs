//! Turn - One user message in, one assistant answer out

use serde::{Deserialize, Serialize};

use super::message::Message;

/// States of the tool-calling loop within a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    AwaitingModel,
    ExecutingTools,
    Done,
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::AwaitingModel => write!(f, "awaiting_model"),
            TurnState::ExecutingTools => write!(f, "executing_tools"),
            TurnState::Done => write!(f, "done"),
        }
    }
}

/// Result of a completed turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Final assistant text shown to the user
    pub reply: String,
    /// Messages produced during the turn, in order, ending with the final assistant message
    pub appended: Vec<Message>,
    /// Number of tool rounds executed before the answer
    pub rounds: usize,
}

impl TurnOutcome {
    /// Names of the tools the model invoked during the turn
    pub fn tools_invoked(&self) -> Vec<String> {
        self.appended
            .iter()
            .flat_map(|m| m.tool_calls.iter().map(|c| c.name.clone()))
            .collect()
    }
}
