//! Alterego API Routes
//!
//! - /chat - One conversation turn (guarded by the optional API key)
//! - /persona - The loaded persona
//! - /health - Liveness
//! - /swagger-ui - OpenAPI documentation

pub mod chat;
pub mod persona;
pub mod swagger;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{auth_middleware, ApiKey};
use crate::AppState;

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Alterego API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full application router
pub fn app(state: AppState, api_key: Option<String>) -> Router {
    // Protected routes (require authentication when a key is configured)
    let protected_routes = Router::new()
        .merge(chat::router())
        .layer(middleware::from_fn_with_state(
            ApiKey(api_key),
            auth_middleware,
        ));

    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(persona::router())
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
