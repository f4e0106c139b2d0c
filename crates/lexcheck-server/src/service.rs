//! Compliance pipeline: keyword matcher, AI analyzer, risk aggregation.

use lexcheck_ai::Analyzer;
use lexcheck_core::{ComplianceResult, Jurisdiction, LawCorpus};
use tracing::info;

pub async fn check_compliance(
    corpus: &LawCorpus,
    analyzer: &Analyzer,
    proposal: &str,
    jurisdiction: Jurisdiction,
) -> ComplianceResult {
    let basic_violations: Vec<_> = corpus
        .search(proposal, jurisdiction)
        .into_iter()
        .cloned()
        .collect();

    let outcome = analyzer.analyze(proposal, jurisdiction).await;
    let source = outcome.source();

    let result = ComplianceResult::new(
        basic_violations,
        outcome.into_analysis(),
        source,
        jurisdiction,
        lexcheck_core::timestamp(),
    );
    info!(
        jurisdiction = %jurisdiction,
        basic_matches = result.basic_violations.len(),
        contradictions = result.ai_analysis.contradictions.len(),
        risk = result.overall_risk.as_str(),
        "compliance check complete"
    );
    result
}
