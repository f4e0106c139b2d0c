//! Overall risk aggregation.
//!
//! Merges the keyword-match count with the AI contradiction count and
//! confidence into one ordinal level:
//!
//! | Level  | Condition                                          |
//! |--------|----------------------------------------------------|
//! | HIGH   | any basic match, or > 2 contradictions at c > 0.8  |
//! | MEDIUM | at least one contradiction at c > 0.6              |
//! | LOW    | otherwise                                          |

use serde::{Deserialize, Serialize};

use crate::analysis::LegalAnalysis;
use crate::law::Law;

const HIGH_MIN_CONTRADICTIONS: usize = 3;
const HIGH_CONFIDENCE: f64 = 0.8;
const MEDIUM_CONFIDENCE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Risk for a set of keyword matches and an AI analysis.
    pub fn for_signals(basic_matches: &[Law], analysis: &LegalAnalysis) -> Self {
        assess_risk(
            basic_matches.len(),
            analysis.contradictions.len(),
            analysis.confidence,
        )
    }
}

/// Decision table over basic-match count, contradiction count and confidence.
pub fn assess_risk(basic_matches: usize, contradictions: usize, confidence: f64) -> RiskLevel {
    if basic_matches > 0
        || (contradictions >= HIGH_MIN_CONTRADICTIONS && confidence > HIGH_CONFIDENCE)
    {
        return RiskLevel::High;
    }
    if contradictions > 0 && confidence > MEDIUM_CONFIDENCE {
        return RiskLevel::Medium;
    }
    RiskLevel::Low
}
