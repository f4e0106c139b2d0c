//! POST /api/check: run a compliance check on a proposal.
//! GET  /api/check: service status descriptor.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lexcheck_core::{FormattedResult, Jurisdiction, format_for_display};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::service::check_compliance;
use crate::state::AppState;

pub const MIN_PROPOSAL_CHARS: usize = 10;
const PREVIEW_CHARS: usize = 50;
const API_VERSION: &str = "2.0";
const FEATURES: &[&str] = &["basic_analysis", "ai_analysis", "risk_assessment"];

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub proposal: Option<String>,
    pub jurisdiction: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub timestamp: String,
    pub proposal_length: usize,
    #[serde(flatten)]
    pub result: FormattedResult,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
    pub timestamp: String,
}

/// Validate a request into a proposal and jurisdiction.
pub fn validate(request: CheckRequest) -> Result<(String, Jurisdiction), ApiError> {
    let (Some(proposal), Some(jurisdiction)) = (
        request.proposal.filter(|p| !p.is_empty()),
        request.jurisdiction.filter(|j| !j.is_empty()),
    ) else {
        return Err(ApiError::missing_fields());
    };

    if proposal.chars().count() < MIN_PROPOSAL_CHARS {
        return Err(ApiError::proposal_too_short(MIN_PROPOSAL_CHARS));
    }

    let jurisdiction = jurisdiction
        .parse::<Jurisdiction>()
        .map_err(|_| ApiError::invalid_jurisdiction())?;
    Ok((proposal, jurisdiction))
}

pub async fn check(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "unreadable check request");
        ApiError::validation("Invalid request body.", rejection.body_text())
    })?;
    let (proposal, jurisdiction) = validate(request)?;

    let preview: String = proposal.chars().take(PREVIEW_CHARS).collect();
    info!(jurisdiction = %jurisdiction, proposal = %preview, "analysing proposal");

    let result =
        check_compliance(&state.corpus, &state.analyzer, &proposal, jurisdiction).await;

    Ok(Json(CheckResponse {
        timestamp: lexcheck_core::timestamp(),
        proposal_length: proposal.chars().count(),
        result: format_for_display(result),
    }))
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "active",
        version: API_VERSION,
        features: FEATURES,
        timestamp: lexcheck_core::timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(proposal: Option<&str>, jurisdiction: Option<&str>) -> CheckRequest {
        CheckRequest {
            proposal: proposal.map(str::to_owned),
            jurisdiction: jurisdiction.map(str::to_owned),
        }
    }

    #[test]
    fn accepts_valid_request() {
        let (proposal, jurisdiction) =
            validate(request(Some("Ban single-use plastics"), Some("BE"))).unwrap();
        assert_eq!(proposal, "Ban single-use plastics");
        assert_eq!(jurisdiction, Jurisdiction::Be);
    }

    #[test]
    fn missing_or_empty_fields() {
        for req in [
            request(None, Some("EU")),
            request(Some("A long enough proposal"), None),
            request(Some(""), Some("EU")),
            request(Some("A long enough proposal"), Some("")),
        ] {
            assert!(matches!(
                validate(req),
                Err(ApiError::Validation { ref error, .. }) if error.contains("required")
            ));
        }
    }

    #[test]
    fn short_proposal_rejected_before_jurisdiction() {
        assert!(matches!(
            validate(request(Some("too short"), Some("XX"))),
            Err(ApiError::Validation { ref error, .. }) if error.contains("too short")
        ));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Nine characters, eighteen bytes.
        assert!(validate(request(Some("ééééééééé"), Some("EU"))).is_err());
        assert!(validate(request(Some("éééééééééé"), Some("EU"))).is_ok());
    }

    #[test]
    fn unknown_jurisdiction_rejected() {
        assert!(matches!(
            validate(request(Some("A long enough proposal"), Some("FR"))),
            Err(ApiError::Validation { ref error, .. }) if error.contains("jurisdiction")
        ));
    }
}
