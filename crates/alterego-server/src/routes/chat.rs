//! Chat Routes - One conversation turn per request
//!
//! The caller owns the history and sends it with every turn.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::Instrument;
use uuid::Uuid;

use crate::models::{ChatRequest, ChatResponse};
use crate::AppState;

/// Send a message to the persona
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Empty message"),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    if payload.message.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "message must not be empty".to_string()));
    }

    let turn_id = Uuid::new_v4();
    let span = tracing::info_span!("chat_turn", %turn_id, history = payload.history.len());

    let (reply, outcome) = state
        .conversation
        .reply(&payload.to_messages())
        .instrument(span)
        .await;

    Ok(Json(ChatResponse {
        reply,
        tools_invoked: outcome.map(|o| o.tools_invoked()).unwrap_or_default(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ConversationConfig, ConversationService, ToolRegistry, MODEL_UNAVAILABLE_REPLY,
    };
    use crate::adapters::DisabledNotifier;
    use alterego::{
        CompletionOptions, CompletionResponse, DomainError, LlmProvider, Message, MessageRole,
        PersonaContext, TokenUsage, ToolCall, ToolDefinition,
    };
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Answers with a tool call first when the user mentions an email, then echoes
    struct EchoProvider {
        seen: Mutex<Vec<Vec<Message>>>,
        fail: bool,
    }

    #[async_trait]
    impl LlmProvider for EchoProvider {
        async fn complete(
            &self,
            messages: &[Message],
            _tools: &[ToolDefinition],
            _options: &CompletionOptions,
        ) -> Result<CompletionResponse, DomainError> {
            if self.fail {
                return Err(DomainError::ModelApi("HTTP 500: boom".to_string()));
            }
            self.seen.lock().unwrap().push(messages.to_vec());

            let last = messages.last().unwrap();
            let message = if last.role == MessageRole::User && last.content_str().contains('@') {
                Message::assistant_tool_calls(
                    None,
                    vec![ToolCall::new(
                        "call_1",
                        "record_user_details",
                        format!(r#"{{"email":"{}"}}"#, last.content_str()),
                    )],
                )
            } else {
                Message::assistant(format!("echo: {}", last.content_str()))
            };

            Ok(CompletionResponse {
                message,
                model: "echo".to_string(),
                usage: TokenUsage::default(),
                finish_reason: None,
            })
        }

        fn provider_name(&self) -> &str {
            "echo"
        }

        fn model_id(&self) -> &str {
            "echo"
        }
    }

    fn app(provider: Arc<EchoProvider>, api_key: Option<&str>) -> Router {
        let conversation = ConversationService::new(
            provider as Arc<dyn LlmProvider>,
            ToolRegistry::new(Arc::new(DisabledNotifier)),
            Arc::new(PersonaContext::new("Test Person", "Tester.")),
            ConversationConfig::default(),
        );
        crate::routes::app(
            AppState {
                conversation: Arc::new(conversation),
            },
            api_key.map(String::from),
        )
    }

    fn provider(fail: bool) -> Arc<EchoProvider> {
        Arc::new(EchoProvider {
            seen: Mutex::new(Vec::new()),
            fail,
        })
    }

    fn post_chat(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_sends_history_then_message() {
        let provider = provider(false);
        let response = app(provider.clone(), None)
            .oneshot(post_chat(serde_json::json!({
                "message": "What do you do?",
                "history": [
                    {"role": "user", "content": "Hi"},
                    {"role": "assistant", "content": "Hello!"}
                ]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["reply"], "echo: What do you do?");
        assert_eq!(body["tools_invoked"], serde_json::json!([]));

        let seen = provider.seen.lock().unwrap();
        let sent = &seen[0];
        assert_eq!(sent.len(), 4);
        assert_eq!(sent[0].role, MessageRole::System);
        assert_eq!(sent[1], Message::user("Hi"));
        assert_eq!(sent[2], Message::assistant("Hello!"));
        assert_eq!(sent[3], Message::user("What do you do?"));
    }

    #[tokio::test]
    async fn test_chat_reports_tools_invoked() {
        let response = app(provider(false), None)
            .oneshot(post_chat(serde_json::json!({"message": "a@b.com"})))
            .await
            .unwrap();

        let body = read_json(response).await;
        assert_eq!(body["tools_invoked"], serde_json::json!(["record_user_details"]));
        assert_eq!(body["reply"], r#"echo: {"recorded":true}"#);
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let response = app(provider(false), None)
            .oneshot(post_chat(serde_json::json!({"message": "   "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_model_failure_is_a_generic_reply() {
        let response = app(provider(true), None)
            .oneshot(post_chat(serde_json::json!({"message": "Hi"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["reply"], MODEL_UNAVAILABLE_REPLY);
    }

    #[tokio::test]
    async fn test_api_key_guards_chat() {
        let unauthorized = app(provider(false), Some("secret"))
            .oneshot(post_chat(serde_json::json!({"message": "Hi"})))
            .await
            .unwrap();
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

        let mut request = post_chat(serde_json::json!({"message": "Hi"}));
        request.headers_mut().insert(
            header::AUTHORIZATION,
            "Bearer secret".parse().unwrap(),
        );
        let authorized = app(provider(false), Some("secret"))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(authorized.status(), StatusCode::OK);
    }
}
