//! Persona - The identity the assistant speaks for
//!
//! Loaded once at startup and shared read-only by every conversation.

use serde::{Deserialize, Serialize};

/// Plain text extracted from one profile document (LinkedIn export, resume, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// Heading used when the document is rendered into a prompt
    pub label: String,
    pub text: String,
}

impl ProfileDocument {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// PersonaContext - everything the assistant knows about the person it represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaContext {
    pub name: String,
    pub summary: String,
    pub documents: Vec<ProfileDocument>,
}

impl PersonaContext {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            documents: Vec::new(),
        }
    }

    pub fn with_document(mut self, document: ProfileDocument) -> Self {
        self.documents.push(document);
        self
    }

    /// All profile document text, in load order
    pub fn profile_text(&self) -> String {
        self.documents.iter().map(|d| d.text.as_str()).collect()
    }

    pub fn document_labels(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.label.as_str()).collect()
    }
}
