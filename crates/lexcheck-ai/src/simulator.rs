//! Deterministic keyword simulator standing in for the hosted model.
//!
//! Scans the lowercased proposal for four keyword families. Each family
//! found contributes one contradiction, one risk, one recommendation and one
//! legal source. Confidence grows by 0.1 per contradiction from 0.6, capped
//! at 0.95.

use lexcheck_core::{Jurisdiction, LegalAnalysis};

const BASE_CONFIDENCE: f64 = 0.6;
const CONFIDENCE_STEP: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.95;

struct Finding {
    contradiction: &'static str,
    risk: &'static str,
    recommendation: &'static str,
    legal_source: &'static str,
}

const DISCRIMINATION_STEMS: &[&str] = &["discrimin"];
const PERSONAL_DATA_STEMS: &[&str] = &["données", "privé"];
const EMPLOYMENT_STEMS: &[&str] = &["travail", "emploi"];
const CONTRACT_STEMS: &[&str] = &["contrat"];
const SURVEILLANCE_STEMS: &[&str] = &["surveil", "contrôl"];

const DISCRIMINATION: Finding = Finding {
    contradiction: "Risk of discrimination contrary to anti-discrimination law",
    risk: "Potential breach of the principle of equal treatment",
    recommendation: "Rephrase the proposal to respect the principle of non-discrimination",
    legal_source: "Directive 2000/43/EC - Equal treatment between persons",
};

const PERSONAL_DATA: Finding = Finding {
    contradiction: "Processing of personal data without reference to the GDPR",
    risk: "Non-compliance with the General Data Protection Regulation",
    recommendation: "Add data protection clauses compliant with the GDPR",
    legal_source: "GDPR (EU) 2016/679 - Articles 5 and 6",
};

const SURVEILLANCE: Finding = Finding {
    contradiction: "Potentially disproportionate surveillance measures",
    risk: "Infringement of individual freedoms and privacy",
    recommendation: "Frame surveillance with strict legal safeguards",
    legal_source: "Article 8 ECHR - Right to respect for private life",
};

const EMPLOYMENT: Finding = Finding {
    contradiction: "Mentions work without a clear contractual framework",
    risk: "Ambiguity about employment conditions",
    recommendation: "Specify the contractual framework and workers' rights",
    legal_source: "Labour code - Title I: Employment contract",
};

const COMPLIANT_RECOMMENDATION: &str =
    "Proposal broadly compliant; monitor its implementation";

fn mentions(text: &str, stems: &[&str]) -> bool {
    stems.iter().any(|stem| text.contains(stem))
}

/// Synthesize an analysis from keyword families found in `proposal`.
///
/// The findings and sources are the same for every jurisdiction.
pub fn simulate_analysis(proposal: &str, _jurisdiction: Jurisdiction) -> LegalAnalysis {
    let text = proposal.to_lowercase();

    let mut findings = Vec::new();
    if mentions(&text, DISCRIMINATION_STEMS) {
        findings.push(DISCRIMINATION);
    }
    if mentions(&text, PERSONAL_DATA_STEMS) {
        findings.push(PERSONAL_DATA);
    }
    if mentions(&text, EMPLOYMENT_STEMS) && !mentions(&text, CONTRACT_STEMS) {
        findings.push(EMPLOYMENT);
    }
    if mentions(&text, SURVEILLANCE_STEMS) {
        findings.push(SURVEILLANCE);
    }

    let count = findings.len();
    let confidence = (BASE_CONFIDENCE + CONFIDENCE_STEP * count as f64).min(MAX_CONFIDENCE);

    let summary = if count == 0 {
        "Analysis complete. No major contradiction detected in this proposal.".to_string()
    } else {
        format!(
            "Analysis complete. {count} potential contradiction(s) identified that need particular attention."
        )
    };

    let recommendations = if count == 0 {
        vec![COMPLIANT_RECOMMENDATION.to_string()]
    } else {
        findings.iter().map(|f| f.recommendation.to_string()).collect()
    };

    LegalAnalysis {
        contradictions: findings.iter().map(|f| f.contradiction.to_string()).collect(),
        risks: findings.iter().map(|f| f.risk.to_string()).collect(),
        confidence,
        recommendations,
        legal_sources: findings.iter().map(|f| f.legal_source.to_string()).collect(),
        summary,
    }
}
