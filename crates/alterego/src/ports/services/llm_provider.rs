//! LLM Provider Port
//!
//! Abstract interface for chat-completion calls with tool declarations.
//! Implementations can be swapped between providers (OpenAI, or any
//! API speaking the same chat-completions dialect).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Message, ToolDefinition};
use crate::domain::errors::DomainError;

/// Options for LLM completion. Unset fields leave the provider's defaults in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    ToolCalls,
    Length,
    ContentFilter,
    Other(String),
}

impl From<&str> for FinishReason {
    fn from(value: &str) -> Self {
        match value {
            "stop" => FinishReason::Stop,
            "tool_calls" | "function_call" => FinishReason::ToolCalls,
            "length" => FinishReason::Length,
            "content_filter" => FinishReason::ContentFilter,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// Response from LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Assistant message, possibly carrying tool calls
    pub message: Message,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
    /// Finish reason
    pub finish_reason: Option<FinishReason>,
}

impl CompletionResponse {
    /// The model wants tools run before it answers
    pub fn requests_tools(&self) -> bool {
        self.message.has_tool_calls()
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// LLM Provider interface
///
/// # Example
///
/// ```rust,ignore
/// use alterego::ports::LlmProvider;
///
/// struct OpenAiProvider { /* ... */ }
///
/// #[async_trait]
/// impl LlmProvider for OpenAiProvider {
///     async fn complete(&self, messages: &[Message], tools: &[ToolDefinition],
///         options: &CompletionOptions) -> Result<CompletionResponse, DomainError> {
///         // POST /chat/completions
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Request one completion for the messages, offering the given tools
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_do_not_cap_output() {
        let options = CompletionOptions::default();
        assert!(options.max_tokens.is_none());
        assert!(options.temperature.is_none());
    }

    #[test]
    fn test_finish_reason_from_wire() {
        assert_eq!(FinishReason::from("tool_calls"), FinishReason::ToolCalls);
        assert_eq!(FinishReason::from("stop"), FinishReason::Stop);
        assert_eq!(
            FinishReason::from("eos"),
            FinishReason::Other("eos".to_string())
        );
    }
}
