//! Chat model abstraction shared by the hosted providers.

use async_trait::async_trait;
use chrono::Datelike;
use lexcheck_core::Jurisdiction;
use thiserror::Error;

use crate::prompt;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("no model API key configured")]
    MissingCredentials,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{provider} returned {status}: {body}")]
    Server {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("{provider} returned no text content")]
    EmptyReply { provider: &'static str },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A hosted chat-completion backend.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a single user message and return the text of the reply.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;

    fn model_name(&self) -> &str;

    fn provider_name(&self) -> &'static str;

    /// Prompt asking for the six-field analysis object.
    fn analysis_prompt(&self, proposal: &str, jurisdiction: Jurisdiction) -> String {
        prompt::analysis_prompt(proposal, jurisdiction, chrono::Utc::now().year())
    }
}

/// Treat unset, blank, and template placeholder keys as absent.
pub fn usable_api_key(key: Option<String>, placeholder: &str) -> Option<String> {
    key.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != placeholder)
}
