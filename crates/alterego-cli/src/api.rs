//! Alterego API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::session::HistoryEntry;

/// API Client for an Alterego server
pub struct AlteregoClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    history: &'a [HistoryEntry],
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub tools_invoked: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonaInfo {
    pub name: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl AlteregoClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Who the server is speaking as
    pub async fn persona(&self) -> Result<PersonaInfo> {
        let url = format!("{}/persona", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Alterego API")?;

        let resp = check(resp).await?;
        resp.json().await.context("Failed to parse response")
    }

    /// Send one message along with the earlier turns of the session
    pub async fn chat(&self, message: &str, history: &[HistoryEntry]) -> Result<ChatReply> {
        let url = format!("{}/chat", self.base_url);
        let resp = self
            .authorize(self.client.post(&url))
            .json(&ChatRequest { message, history })
            .send()
            .await
            .context("Failed to connect to Alterego API")?;

        let resp = check(resp).await?;
        resp.json().await.context("Failed to parse response")
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }
}

async fn check(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }
    Ok(resp)
}
