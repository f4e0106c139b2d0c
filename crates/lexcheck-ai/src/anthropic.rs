//! Anthropic messages backend.

use async_trait::async_trait;
use lexcheck_core::Jurisdiction;
use serde::Deserialize;
use tracing::info;

use crate::client::{AiError, ChatModel};
use crate::prompt;

const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";
const PROVIDER: &str = "Anthropic";
const MAX_TOKENS: u32 = 1000;

pub const ANTHROPIC_KEY_PLACEHOLDER: &str = "your-anthropic-api-key-here";

#[derive(Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl ChatModel for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = serde_json::json!({
            "model": &self.model,
            "max_tokens": MAX_TOKENS,
            "messages": [{"role": "user", "content": prompt}],
        });

        info!(model = %self.model, "requesting Anthropic analysis");
        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AiError::Server {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        // Only a leading text block is usable; tool-use or empty content is not.
        let message: MessagesResponse = resp.json().await?;
        match message.content.into_iter().next() {
            Some(block) if block.kind == "text" => block
                .text
                .ok_or(AiError::EmptyReply { provider: PROVIDER }),
            _ => Err(AiError::EmptyReply { provider: PROVIDER }),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn analysis_prompt(&self, proposal: &str, jurisdiction: Jurisdiction) -> String {
        prompt::brief_analysis_prompt(proposal, jurisdiction)
    }
}
