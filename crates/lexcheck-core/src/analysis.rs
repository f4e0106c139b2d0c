//! Per-request analysis and compliance result types.

use serde::{Deserialize, Serialize};

use crate::law::{Jurisdiction, Law};
use crate::risk::RiskLevel;

/// Structured legal-risk summary, from the hosted model or the simulator.
///
/// Field names on the wire are camelCase, matching the JSON object the model
/// is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalAnalysis {
    pub contradictions: Vec<String>,
    pub risks: Vec<String>,
    /// Self-assessed certainty in `[0, 1]`.
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub legal_sources: Vec<String>,
    pub summary: String,
}

/// Which path produced [`ComplianceResult::ai_analysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Model,
    Simulator,
}

/// Combined keyword-match and AI analysis for one proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub basic_violations: Vec<Law>,
    pub ai_analysis: LegalAnalysis,
    pub overall_risk: RiskLevel,
    /// RFC 3339 timestamp string.
    pub last_updated: String,
    pub jurisdiction: Jurisdiction,
    pub analysis_source: AnalysisSource,
}

impl ComplianceResult {
    /// Assemble a result, deriving `overall_risk` from the two signals.
    pub fn new(
        basic_violations: Vec<Law>,
        ai_analysis: LegalAnalysis,
        analysis_source: AnalysisSource,
        jurisdiction: Jurisdiction,
        last_updated: String,
    ) -> Self {
        let overall_risk = RiskLevel::for_signals(&basic_violations, &ai_analysis);
        Self {
            basic_violations,
            ai_analysis,
            overall_risk,
            last_updated,
            jurisdiction,
            analysis_source,
        }
    }
}
