//! Tool - Model-requested actions and their results

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::message::Message;
use crate::domain::value_objects::ToolKind;

/// A tool invocation requested by the language model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique within a turn; echoed back on the matching tool message
    pub id: String,
    /// Tool name as the model wrote it
    pub name: String,
    /// Raw JSON arguments as produced by the model
    pub arguments: String,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// The declared tool this call refers to, if any
    pub fn kind(&self) -> Option<ToolKind> {
        self.name.parse().ok()
    }
}

/// Outcome of executing one tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub payload: Value,
}

impl ToolResult {
    /// `{"recorded": true}`
    pub fn recorded(tool_call_id: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            payload: json!({ "recorded": true }),
        }
    }

    /// `{"recorded": false, "error": "..."}`
    pub fn failed(tool_call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            payload: json!({ "recorded": false, "error": error.into() }),
        }
    }

    pub fn is_recorded(&self) -> bool {
        self.payload
            .get("recorded")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Tool-role message to append to the history
    pub fn into_message(self) -> Message {
        Message::tool(self.tool_call_id, self.payload.to_string())
    }
}

/// Tool declaration sent to the language model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the parameters object
    pub parameters: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Names listed in the schema's `required` array
    pub fn required_parameters(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|required| required.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MessageRole;

    #[test]
    fn test_tool_call_kind() {
        let known = ToolCall::new("1", "record_user_details", "{}");
        assert_eq!(known.kind(), Some(ToolKind::RecordUserDetails));

        let unknown = ToolCall::new("2", "delete_everything", "{}");
        assert_eq!(unknown.kind(), None);
    }

    #[test]
    fn test_result_into_message() {
        let msg = ToolResult::recorded("call_9").into_message();
        assert_eq!(msg.role, MessageRole::Tool);
        assert_eq!(msg.tool_call_id.as_deref(), Some("call_9"));
        assert_eq!(msg.content_str(), r#"{"recorded":true}"#);
    }

    #[test]
    fn test_failed_result_is_not_recorded() {
        let result = ToolResult::failed("call_1", "missing field `email`");
        assert!(!result.is_recorded());
        assert_eq!(result.payload["error"], "missing field `email`");
    }
}
