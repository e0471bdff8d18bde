//! Conversation Service (Use Case)
//!
//! Runs one chat turn: prepend the persona's system prompt, ask the model,
//! execute any tool calls it requests, and ask again until it answers in
//! plain text or the round bound is reached.

use std::sync::Arc;

use alterego::{
    CompletionOptions, DomainError, FinishReason, LlmProvider, Message, PersonaContext,
    TurnOutcome, TurnState,
};

use super::prompt::build_system_prompt;
use super::tool_registry::ToolRegistry;

pub const MODEL_UNAVAILABLE_REPLY: &str =
    "Sorry, I'm having trouble answering right now. Please try again in a moment.";
pub const DEADLOCK_REPLY: &str =
    "Sorry, I got stuck working on that one. Could you rephrase your question?";

/// Tunables for the tool-calling loop
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// Tool rounds allowed before the turn fails with `ConversationDeadlock`
    pub max_tool_rounds: usize,
    pub completion: CompletionOptions,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: 8,
            completion: CompletionOptions::default(),
        }
    }
}

/// Application service for chat turns
pub struct ConversationService<P: LlmProvider + ?Sized> {
    provider: Arc<P>,
    tools: ToolRegistry,
    persona: Arc<PersonaContext>,
    config: ConversationConfig,
}

impl<P: LlmProvider + ?Sized> ConversationService<P> {
    pub fn new(
        provider: Arc<P>,
        tools: ToolRegistry,
        persona: Arc<PersonaContext>,
        config: ConversationConfig,
    ) -> Self {
        Self {
            provider,
            tools,
            persona,
            config,
        }
    }

    pub fn persona(&self) -> &PersonaContext {
        &self.persona
    }

    /// Answer the last message of `history`.
    ///
    /// `history` is the caller's conversation so far, ending with the new user
    /// message. It is not modified; the messages produced by this turn are
    /// returned in `TurnOutcome::appended`.
    pub async fn respond(&self, history: &[Message]) -> Result<TurnOutcome, DomainError> {
        let definitions = self.tools.definitions();

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message::system(build_system_prompt(&self.persona)));
        messages.extend_from_slice(history);

        let mut appended = Vec::new();
        let mut rounds = 0;
        let mut state = TurnState::AwaitingModel;

        loop {
            tracing::debug!(%state, rounds, "Conversation turn");

            let response = self
                .provider
                .complete(&messages, &definitions, &self.config.completion)
                .await?;

            tracing::debug!(
                model = %response.model,
                finish_reason = ?response.finish_reason,
                total_tokens = response.usage.total_tokens,
                "Model responded"
            );

            if !response.requests_tools() {
                if response.finish_reason == Some(FinishReason::Length) {
                    tracing::warn!(
                        model = %response.model,
                        "Reply was cut off at the output token limit"
                    );
                }
                state = TurnState::Done;
                let reply = response.message.content.clone().unwrap_or_default();
                appended.push(Message::assistant(reply.clone()));

                tracing::info!(%state, rounds, reply_len = reply.len(), "Turn complete");

                return Ok(TurnOutcome {
                    reply,
                    appended,
                    rounds,
                });
            }

            if rounds >= self.config.max_tool_rounds {
                tracing::warn!(
                    rounds,
                    provider = self.provider.provider_name(),
                    model = self.provider.model_id(),
                    "Model kept requesting tools; giving up on this turn"
                );
                return Err(DomainError::ConversationDeadlock { rounds });
            }

            state = TurnState::ExecutingTools;
            rounds += 1;
            tracing::debug!(%state, rounds, calls = response.message.tool_calls.len(), "Executing tools");

            let assistant = response.message;
            let mut results = Vec::with_capacity(assistant.tool_calls.len());
            for call in &assistant.tool_calls {
                results.push(self.tools.execute(call).await.into_message());
            }

            messages.push(assistant.clone());
            messages.extend(results.iter().cloned());
            appended.push(assistant);
            appended.extend(results);

            state = TurnState::AwaitingModel;
        }
    }

    /// Answer for display: internal failures become a generic reply.
    pub async fn reply(&self, history: &[Message]) -> (String, Option<TurnOutcome>) {
        match self.respond(history).await {
            Ok(outcome) => (outcome.reply.clone(), Some(outcome)),
            Err(e) => {
                if e.is_fatal() {
                    tracing::error!(error = %e, "Turn failed on a startup-class error");
                } else {
                    tracing::warn!(error = %e, "Turn failed");
                }
                let text = match e {
                    DomainError::ConversationDeadlock { .. } => DEADLOCK_REPLY,
                    _ => MODEL_UNAVAILABLE_REPLY,
                };
                (text.to_string(), None)
            }
        }
    }
}
