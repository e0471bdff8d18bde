//! Tool Registry
//!
//! The actions the model may call, their declarations, and name-based dispatch.
//! Unknown tool names are acknowledged rather than failing the turn.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use alterego::{
    DomainError, NotificationEvent, Notifier, ToolCall, ToolDefinition, ToolKind, ToolResult,
};

const DEFAULT_NAME: &str = "Name not provided";
const DEFAULT_NOTES: &str = "not provided";

#[derive(Debug, Deserialize)]
struct UserDetailsArgs {
    email: String,
    name: Option<String>,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnknownQuestionArgs {
    question: String,
}

pub struct ToolRegistry {
    notifier: Arc<dyn Notifier>,
}

impl ToolRegistry {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Declarations offered to the model on every request
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        ToolKind::ALL.iter().map(|kind| definition(*kind)).collect()
    }

    /// Record a visitor's contact details. Email format is not validated.
    pub async fn record_user_details(
        &self,
        email: &str,
        name: Option<&str>,
        notes: Option<&str>,
    ) -> Value {
        let event = NotificationEvent::contact(
            email,
            name.unwrap_or(DEFAULT_NAME),
            notes.unwrap_or(DEFAULT_NOTES),
        );
        self.dispatch(event).await;
        json!({ "recorded": true })
    }

    /// Record a question the assistant could not answer
    pub async fn record_unknown_question(&self, question: &str) -> Value {
        self.dispatch(NotificationEvent::unknown_question(question))
            .await;
        json!({ "recorded": true })
    }

    /// Run one tool call and produce exactly one result for it
    pub async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(kind) = call.kind() else {
            tracing::warn!(tool = %call.name, id = %call.id, "Model called an undeclared tool");
            return ToolResult::recorded(&call.id);
        };

        tracing::info!(tool = %kind, id = %call.id, "Tool called");

        match self.run(kind, &call.arguments).await {
            Ok(payload) => ToolResult {
                tool_call_id: call.id.clone(),
                payload,
            },
            Err(e) => {
                tracing::warn!(tool = %kind, id = %call.id, error = %e, "Tool failed");
                ToolResult::failed(&call.id, e.to_string())
            }
        }
    }

    async fn run(&self, kind: ToolKind, arguments: &str) -> Result<Value, DomainError> {
        let arguments = if arguments.trim().is_empty() {
            "{}"
        } else {
            arguments
        };

        match kind {
            ToolKind::RecordUserDetails => {
                let args: UserDetailsArgs = parse_arguments(arguments)?;
                Ok(self
                    .record_user_details(&args.email, args.name.as_deref(), args.notes.as_deref())
                    .await)
            }
            ToolKind::RecordUnknownQuestion => {
                let args: UnknownQuestionArgs = parse_arguments(arguments)?;
                Ok(self.record_unknown_question(&args.question).await)
            }
        }
    }

    async fn dispatch(&self, event: NotificationEvent) {
        let status = self.notifier.notify(&event).await;
        if !status.is_delivered() {
            tracing::debug!(notifier = self.notifier.name(), %status, "Continuing without notification");
        }
    }
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(raw: &str) -> Result<T, DomainError> {
    serde_json::from_str(raw)
        .map_err(|e| DomainError::ToolExecution(format!("invalid arguments: {e}")))
}

fn definition(kind: ToolKind) -> ToolDefinition {
    match kind {
        ToolKind::RecordUserDetails => ToolDefinition::new(
            kind.as_str(),
            "Use this tool to record that a user is interested in being in touch and provided an email address",
            json!({
                "type": "object",
                "properties": {
                    "email": {
                        "type": "string",
                        "description": "The email address of this user"
                    },
                    "name": {
                        "type": "string",
                        "description": "The user's name, if they provided it"
                    },
                    "notes": {
                        "type": "string",
                        "description": "Any additional information about the conversation that's worth recording to give context"
                    }
                },
                "required": ["email"],
                "additionalProperties": false
            }),
        ),
        ToolKind::RecordUnknownQuestion => ToolDefinition::new(
            kind.as_str(),
            "Always use this tool to record any question that couldn't be answered as you didn't know the answer",
            json!({
                "type": "object",
                "properties": {
                    "question": {
                        "type": "string",
                        "description": "The question that couldn't be answered"
                    }
                },
                "required": ["question"],
                "additionalProperties": false
            }),
        ),
    }
}
