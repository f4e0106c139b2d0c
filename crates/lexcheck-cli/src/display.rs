//! Terminal card display for compliance results.
//!
//! Renders a [`FormattedResult`] as a grouped, human-readable card: risk
//! header first, then one section per non-empty list.

use std::fmt::Write as _;

use lexcheck_core::{AnalysisSource, FormattedResult, Law, RiskLevel};

const MAX_EXCERPT_CHARS: usize = 100;

/// Print a compliance result as a vertical card.
pub fn print_result_card(formatted: &FormattedResult) {
    print!("{}", render_result_card(formatted));
}

pub fn render_result_card(formatted: &FormattedResult) -> String {
    let result = &formatted.result;
    let analysis = &result.ai_analysis;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "=== {} risk ({}) ===",
        result.overall_risk.as_str(),
        result.jurisdiction
    );
    let _ = writeln!(out, "{}", analysis.summary);
    let _ = writeln!(
        out,
        "AI confidence: {}%  (source: {})",
        formatted.confidence_percentage,
        source_label(result.analysis_source)
    );
    out.push('\n');

    if !formatted.has_violations {
        let _ = writeln!(out, "{} No major contradiction detected.", risk_icon(RiskLevel::Low));
        out.push('\n');
    }

    write_section(&mut out, "Contradictions", &analysis.contradictions);
    write_section(&mut out, "Legal risks", &analysis.risks);
    write_laws(&mut out, &result.basic_violations);
    write_section(&mut out, "Recommendations", &analysis.recommendations);
    write_section(&mut out, "Legal sources", &analysis.legal_sources);

    let _ = writeln!(out, "Last updated: {}", result.last_updated);
    out
}

fn write_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "── {heading} ({}) ──", items.len());
    for item in items {
        let _ = writeln!(out, "  • {item}");
    }
    out.push('\n');
}

fn write_laws(out: &mut String, laws: &[Law]) {
    if laws.is_empty() {
        return;
    }
    let _ = writeln!(out, "── Matching laws ({}) ──", laws.len());
    for law in laws {
        let _ = writeln!(out, "  • [{}] {}", law.id, law.title);
        let _ = writeln!(out, "      {}", excerpt(&law.content));
    }
    out.push('\n');
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
    format!("{}…", cut.trim_end())
}

fn risk_icon(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "[!!]",
        RiskLevel::Medium => "[!]",
        RiskLevel::Low => "[ok]",
    }
}

fn source_label(source: AnalysisSource) -> &'static str {
    match source {
        AnalysisSource::Model => "model",
        AnalysisSource::Simulator => "simulator",
    }
}
