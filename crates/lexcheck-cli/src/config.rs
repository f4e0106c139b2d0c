//! Runtime configuration from flags and environment.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, ValueEnum};
use lexcheck_ai::{
    ANTHROPIC_KEY_PLACEHOLDER, Analyzer, AnthropicClient, ChatModel, OPENAI_KEY_PLACEHOLDER,
    OpenAiClient, usable_api_key,
};
use lexcheck_core::LawCorpus;
use lexcheck_server::AppState;
use lexcheck_sync::EurLexClient;
use lexcheck_sync::eurlex::DEFAULT_ENDPOINT;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    Openai,
    Anthropic,
    /// Always use the keyword simulator.
    None,
}

/// Settings shared by every subcommand.
#[derive(Args)]
pub struct Settings {
    /// Hosted model provider for the AI analysis.
    #[arg(long, env = "LEXCHECK_AI_PROVIDER", value_enum, default_value = "openai")]
    pub provider: Provider,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL")]
    pub openai_model: Option<String>,

    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    #[arg(long, env = "ANTHROPIC_MODEL")]
    pub anthropic_model: Option<String>,

    /// Law corpus JSON file (defaults to the bundled corpus).
    #[arg(long, env = "LEXCHECK_LAWS")]
    pub laws: Option<PathBuf>,

    #[arg(long, env = "LEXCHECK_EURLEX_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub eurlex_endpoint: String,

    /// Timeout for upstream HTTP calls, in seconds.
    #[arg(long, env = "LEXCHECK_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Include internal error details in 500 responses.
    #[arg(long, env = "LEXCHECK_DEV")]
    pub dev: bool,
}

impl Settings {
    pub fn http_client(&self) -> anyhow::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .context("building HTTP client")
    }

    pub fn load_corpus(&self) -> anyhow::Result<LawCorpus> {
        let corpus = match &self.laws {
            Some(path) => LawCorpus::load(path)
                .with_context(|| format!("loading law corpus from {}", path.display()))?,
            None => LawCorpus::bundled().context("parsing bundled law corpus")?,
        };
        Ok(corpus)
    }

    /// The configured chat model, or `None` when its key is missing.
    pub fn chat_model(&self, http: &reqwest::Client) -> Option<Arc<dyn ChatModel>> {
        let model: Arc<dyn ChatModel> = match self.provider {
            Provider::None => return None,
            Provider::Openai => {
                let key = usable_api_key(self.openai_api_key.clone(), OPENAI_KEY_PLACEHOLDER)?;
                let mut client = OpenAiClient::new(key).with_http_client(http.clone());
                if let Some(model) = &self.openai_model {
                    client = client.with_model(model);
                }
                Arc::new(client)
            }
            Provider::Anthropic => {
                let key =
                    usable_api_key(self.anthropic_api_key.clone(), ANTHROPIC_KEY_PLACEHOLDER)?;
                let mut client = AnthropicClient::new(key).with_http_client(http.clone());
                if let Some(model) = &self.anthropic_model {
                    client = client.with_model(model);
                }
                Arc::new(client)
            }
        };
        Some(model)
    }

    pub fn analyzer(&self, http: &reqwest::Client) -> Analyzer {
        match self.chat_model(http) {
            Some(model) => {
                info!(
                    provider = model.provider_name(),
                    model = model.model_name(),
                    "AI analysis enabled"
                );
                Analyzer::new(model)
            }
            None => {
                if self.provider != Provider::None {
                    warn!(provider = ?self.provider, "no API key configured, using simulator");
                }
                Analyzer::simulated()
            }
        }
    }

    pub fn app_state(&self) -> anyhow::Result<AppState> {
        let http = self.http_client()?;
        let corpus = self.load_corpus()?;
        let analyzer = self.analyzer(&http);
        let eurlex = EurLexClient::new(self.eurlex_endpoint.clone()).with_http_client(http);
        Ok(AppState::new(corpus, analyzer, eurlex).with_dev_mode(self.dev))
    }
}
