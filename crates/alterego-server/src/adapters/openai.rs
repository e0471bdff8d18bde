//! OpenAI Chat Completions Provider
//!
//! Implements `LlmProvider` against `/chat/completions`, round-tripping
//! tool calls in OpenAI's function-calling format.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use alterego::{
    CompletionOptions, CompletionResponse, DomainError, FinishReason, LlmProvider, Message,
    MessageRole, TokenUsage, ToolCall, ToolDefinition,
};

use crate::config::OpenAiSettings;

const PROVIDER_NAME: &str = "openai";

/// OpenAI implementation of LlmProvider
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(settings: &OpenAiSettings) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: messages.iter().map(WireMessage::from).collect(),
            tools: tools.iter().map(WireTool::from).collect(),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        tracing::debug!(
            model = %self.model,
            messages = messages.len(),
            tools = tools.len(),
            "Requesting chat completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::ModelApi("request timed out".to_string())
                } else {
                    DomainError::ModelApi(format!("request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::ModelApi(format!("failed to decode response: {e}")))?;

        let usage = payload.usage.unwrap_or_default();
        let choice = payload
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::ModelApi("response contained no choices".to_string()))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| ToolCall::new(call.id, call.function.name, call.function.arguments))
            .collect::<Vec<_>>();

        let message = if tool_calls.is_empty() {
            Message::assistant(choice.message.content.unwrap_or_default())
        } else {
            Message::assistant_tool_calls(choice.message.content, tool_calls)
        };

        Ok(CompletionResponse {
            message,
            model: payload.model.unwrap_or_else(|| self.model.clone()),
            usage,
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::from),
        })
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct WireMessage {
    role: MessageRole,
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
            tool_calls: message.tool_calls.iter().map(WireToolCall::from).collect(),
            tool_call_id: message.tool_call_id.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type", default = "function_type")]
    kind: String,
    function: WireFunctionCall,
}

impl From<&ToolCall> for WireToolCall {
    fn from(call: &ToolCall) -> Self {
        Self {
            id: call.id.clone(),
            kind: function_type(),
            function: WireFunctionCall {
                name: call.name.clone(),
                arguments: call.arguments.clone(),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}

#[derive(Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunctionDef,
}

#[derive(Serialize)]
struct WireFunctionDef {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

impl From<&ToolDefinition> for WireTool {
    fn from(def: &ToolDefinition) -> Self {
        Self {
            kind: "function",
            function: WireFunctionDef {
                name: def.name.clone(),
                description: def.description.clone(),
                parameters: def.parameters.clone(),
            },
        }
    }
}

fn function_type() -> String {
    "function".to_string()
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<WireToolCall>>,
}

// ============================================
// Helper Functions
// ============================================

fn map_http_error(status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DomainError::ModelApi(format!("authentication failed: {message}"))
        }
        StatusCode::TOO_MANY_REQUESTS => DomainError::ModelApi(format!("rate limited: {message}")),
        _ => DomainError::ModelApi(format!("HTTP {}: {message}", status.as_u16())),
    }
}
