use std::sync::Arc;

use alterego::{LlmProvider, Notifier};

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{DisabledNotifier, OpenAiProvider, PushoverNotifier};
use application::{ContextLoader, ConversationConfig, ConversationService, ToolRegistry};
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<ConversationService<dyn LlmProvider>>,
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Alterego API initializing...");

    let _ = dotenvy::dotenv();
    let config = AppConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
        .map_err(anyhow::Error::from)?;

    // Persona documents are required; refuse to serve without them
    let persona = ContextLoader::new(config.persona.clone())
        .load()
        .map_err(|e| {
            tracing::error!(error = %e, fatal = e.is_fatal(), "Failed to load persona documents");
            anyhow::Error::from(e)
        })?;
    tracing::info!(
        persona = %persona.name,
        documents = persona.documents.len(),
        profile_chars = persona.profile_text().len(),
        "Persona context loaded"
    );

    let notifier: Arc<dyn Notifier> = match config.pushover.clone() {
        Some(settings) => {
            tracing::info!("Pushover notifications enabled");
            Arc::new(PushoverNotifier::new(settings).map_err(anyhow::Error::from)?)
        }
        None => {
            tracing::warn!("No PUSHOVER_TOKEN/PUSHOVER_USER set - notifications disabled");
            Arc::new(DisabledNotifier)
        }
    };

    let provider: Arc<dyn LlmProvider> =
        Arc::new(OpenAiProvider::new(&config.openai).map_err(anyhow::Error::from)?);
    tracing::info!(model = %config.openai.model, "Language model provider initialized");

    if config.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("No ALTEREGO_API_KEY set - chat routes are open");
    }

    let conversation = ConversationService::new(
        provider,
        ToolRegistry::new(notifier),
        Arc::new(persona),
        ConversationConfig {
            max_tool_rounds: config.max_tool_rounds,
            ..Default::default()
        },
    );

    let state = AppState {
        conversation: Arc::new(conversation),
    };

    let router = routes::app(state, config.api_key.clone());

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Alterego API ready");

    Ok(router.into())
}
