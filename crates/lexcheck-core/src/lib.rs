pub mod analysis;
pub mod display;
pub mod law;
pub mod risk;
pub mod updates;

pub use analysis::{AnalysisSource, ComplianceResult, LegalAnalysis};
pub use display::{FormattedResult, format_for_display};
pub use law::{CorpusError, Jurisdiction, Law, LawCorpus, UnknownJurisdiction, tokenize};
pub use risk::{RiskLevel, assess_risk};
pub use updates::{Impact, LegalUpdate, legal_updates};

/// Current UTC time as an RFC 3339 string with millisecond precision.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
