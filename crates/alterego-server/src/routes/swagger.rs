//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ChatRequest, ChatResponse, ChatRole, ChatTurn, PersonaResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::chat::chat,
        super::persona::get_persona,
    ),
    info(
        title = "Alterego API",
        version = "0.1.0",
        description = "Chat with a persona grounded in their resume, profile and summary.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Chat", description = "Chat - One conversation turn per request"),
        (name = "Persona", description = "Persona - The identity behind the assistant"),
    ),
    components(
        schemas(
            ChatRole,
            ChatTurn,
            ChatRequest,
            ChatResponse,
            PersonaResponse,
        )
    ),
)]
pub struct ApiDoc;
