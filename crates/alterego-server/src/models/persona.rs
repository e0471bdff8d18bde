//! Persona - Public view of the loaded identity

use serde::Serialize;
use utoipa::ToSchema;

use alterego::PersonaContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonaResponse {
    pub name: String,
    pub summary: String,
    pub documents: Vec<String>,
}

impl From<&PersonaContext> for PersonaResponse {
    fn from(persona: &PersonaContext) -> Self {
        Self {
            name: persona.name.clone(),
            summary: persona.summary.clone(),
            documents: persona
                .document_labels()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
