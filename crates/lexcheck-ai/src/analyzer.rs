//! Model-first analysis with simulator fallback.

use std::sync::Arc;

use lexcheck_core::{AnalysisSource, Jurisdiction, LegalAnalysis};
use tracing::{debug, info, warn};

use crate::client::{AiError, ChatModel};
use crate::simulator::simulate_analysis;

/// How an analysis was produced.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// The hosted model replied with a well-formed analysis.
    Model {
        analysis: LegalAnalysis,
        model: String,
    },
    /// The simulator produced the analysis because the model path failed.
    Simulated {
        analysis: LegalAnalysis,
        reason: AiError,
    },
}

impl AnalysisOutcome {
    pub fn analysis(&self) -> &LegalAnalysis {
        match self {
            Self::Model { analysis, .. } | Self::Simulated { analysis, .. } => analysis,
        }
    }

    pub fn into_analysis(self) -> LegalAnalysis {
        match self {
            Self::Model { analysis, .. } | Self::Simulated { analysis, .. } => analysis,
        }
    }

    pub fn source(&self) -> AnalysisSource {
        match self {
            Self::Model { .. } => AnalysisSource::Model,
            Self::Simulated { .. } => AnalysisSource::Simulator,
        }
    }
}

/// Runs proposals through the configured chat model, if any.
///
/// Built once at startup and shared across requests.
pub struct Analyzer {
    model: Option<Arc<dyn ChatModel>>,
}

impl Analyzer {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model: Some(model) }
    }

    /// An analyzer with no model; every analysis is simulated.
    pub fn simulated() -> Self {
        Self { model: None }
    }

    pub fn model(&self) -> Option<&dyn ChatModel> {
        self.model.as_deref()
    }

    /// Analyse a proposal. Never fails: model errors fall back to the simulator.
    pub async fn analyze(&self, proposal: &str, jurisdiction: Jurisdiction) -> AnalysisOutcome {
        match self.ask_model(proposal, jurisdiction).await {
            Ok((analysis, model)) => {
                info!(
                    model = %model,
                    contradictions = analysis.contradictions.len(),
                    "model analysis complete"
                );
                AnalysisOutcome::Model { analysis, model }
            }
            Err(reason) => {
                if matches!(reason, AiError::MissingCredentials) {
                    debug!("no model configured, using simulator");
                } else {
                    warn!(error = %reason, "model analysis failed, using simulator");
                }
                AnalysisOutcome::Simulated {
                    analysis: simulate_analysis(proposal, jurisdiction),
                    reason,
                }
            }
        }
    }

    async fn ask_model(
        &self,
        proposal: &str,
        jurisdiction: Jurisdiction,
    ) -> Result<(LegalAnalysis, String), AiError> {
        let model = self.model.as_ref().ok_or(AiError::MissingCredentials)?;
        let prompt = model.analysis_prompt(proposal, jurisdiction);
        let reply = model.complete(&prompt).await?;
        let analysis = parse_analysis(&reply)?;
        Ok((analysis, model.model_name().to_string()))
    }
}

/// Parse a model reply as the six-field analysis object.
pub fn parse_analysis(reply: &str) -> Result<LegalAnalysis, AiError> {
    Ok(serde_json::from_str(reply.trim())?)
}
