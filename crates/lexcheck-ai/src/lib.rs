//! AI analysis layer: hosted chat models (OpenAI, Anthropic) and the
//! rule-based simulator used when no model is available.

mod analyzer;
mod anthropic;
mod client;
mod openai;
pub mod prompt;
pub mod simulator;

pub use analyzer::{AnalysisOutcome, Analyzer, parse_analysis};
pub use anthropic::{ANTHROPIC_KEY_PLACEHOLDER, AnthropicClient};
pub use client::{AiError, ChatModel, usable_api_key};
pub use openai::{OPENAI_KEY_PLACEHOLDER, OpenAiClient};
pub use simulator::simulate_analysis;
