//! Legal updates feed.
//!
//! Placeholder feed until the EUR-Lex and Moniteur belge watchers exist:
//! returns two fixed entries dated relative to `today`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::law::Jurisdiction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalUpdate {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub source: String,
    pub summary: String,
    pub impact: Impact,
}

pub fn legal_updates(jurisdiction: Jurisdiction, today: NaiveDate) -> Vec<LegalUpdate> {
    let (recent_source, older_source) = match jurisdiction {
        Jurisdiction::Eu => ("EUR-Lex", "Official Journal of the EU"),
        Jurisdiction::Be => ("Moniteur belge", "Belgian labour code"),
    };
    let week_ago = today - chrono::Duration::days(7);

    vec![
        LegalUpdate {
            date: today.format("%Y-%m-%d").to_string(),
            source: recent_source.into(),
            summary: "New guidance on personal data protection in the public sector".into(),
            impact: Impact::High,
        },
        LegalUpdate {
            date: week_ago.format("%Y-%m-%d").to_string(),
            source: older_source.into(),
            summary: "Updated rules on remote work".into(),
            impact: Impact::Medium,
        },
    ]
}
