//! Presentation fields derived from a [`ComplianceResult`].

use serde::Serialize;

use crate::analysis::ComplianceResult;
use crate::risk::RiskLevel;

impl RiskLevel {
    /// CSS class token used by the front end for this level.
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::High => "bg-red-100 text-red-800 border-red-200",
            Self::Medium => "bg-yellow-100 text-yellow-800 border-yellow-200",
            Self::Low => "bg-green-100 text-green-800 border-green-200",
        }
    }
}

/// A compliance result plus display-only fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    #[serde(flatten)]
    pub result: ComplianceResult,
    pub risk_color: &'static str,
    pub confidence_percentage: i64,
    pub has_violations: bool,
}

impl FormattedResult {
    /// Recompute the display fields from the wrapped result.
    pub fn reformat(self) -> Self {
        format_for_display(self.result)
    }
}

/// Derive the display fields. The percentage is clamped to 0..=100 for model
/// replies that report confidence outside [0, 1]; the result keeps the raw value.
pub fn format_for_display(result: ComplianceResult) -> FormattedResult {
    let analysis = &result.ai_analysis;
    let has_violations =
        !result.basic_violations.is_empty() || !analysis.contradictions.is_empty();
    FormattedResult {
        risk_color: result.overall_risk.color_class(),
        confidence_percentage: (analysis.confidence.clamp(0.0, 1.0) * 100.0).round() as i64,
        has_violations,
        result,
    }
}
