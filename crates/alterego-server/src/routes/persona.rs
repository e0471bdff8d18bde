//! Persona Routes - Who the assistant speaks for

use axum::{extract::State, routing::get, Json, Router};

use crate::models::PersonaResponse;
use crate::AppState;

/// Get the loaded persona
#[utoipa::path(
    get,
    path = "/persona",
    responses(
        (status = 200, description = "Loaded persona", body = PersonaResponse)
    ),
    tag = "Persona"
)]
pub async fn get_persona(State(state): State<AppState>) -> Json<PersonaResponse> {
    Json(PersonaResponse::from(state.conversation.persona()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/persona", get(get_persona))
}
