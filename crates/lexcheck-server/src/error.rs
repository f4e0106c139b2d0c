//! API error type and its JSON rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lexcheck_sync::EurLexError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

const INTERNAL_ERROR: &str = "Internal server error";
const GENERIC_DETAILS: &str = "An error occurred during the analysis.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input, reported as 400 with a human-readable explanation.
    #[error("{error}")]
    Validation { error: String, details: String },

    #[error("Missing keyword")]
    MissingKeyword,

    #[error("EUR-Lex search failed: {0}")]
    EurLex(#[from] EurLexError),

    /// Unexpected failure; `detail` is only shown when `expose` is set.
    #[error("internal error: {detail}")]
    Internal { detail: String, expose: bool },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl ApiError {
    pub fn validation(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Validation {
            error: error.into(),
            details: details.into(),
        }
    }

    pub fn missing_fields() -> Self {
        Self::validation(
            "Proposal and jurisdiction are required.",
            "Provide a proposal and select a jurisdiction (EU or BE).",
        )
    }

    pub fn proposal_too_short(min_chars: usize) -> Self {
        Self::validation(
            "Proposal too short.",
            format!("Enter a proposal of at least {min_chars} characters."),
        )
    }

    pub fn invalid_jurisdiction() -> Self {
        Self::validation("Invalid jurisdiction.", "Jurisdiction must be EU or BE.")
    }

    pub fn internal(detail: impl Into<String>, expose: bool) -> Self {
        Self::Internal {
            detail: detail.into(),
            expose,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::MissingKeyword => StatusCode::BAD_REQUEST,
            Self::EurLex(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation { error, details } => ErrorBody {
                error,
                details: Some(details),
                timestamp: None,
            },
            Self::MissingKeyword => ErrorBody {
                error: "Missing keyword".into(),
                details: None,
                timestamp: None,
            },
            Self::EurLex(err) => {
                error!(error = %err, "EUR-Lex search failed");
                ErrorBody {
                    error: "Failed to fetch from EUR-Lex".into(),
                    details: None,
                    timestamp: None,
                }
            }
            Self::Internal { detail, expose } => {
                error!(detail = %detail, "internal error");
                ErrorBody {
                    error: INTERNAL_ERROR.into(),
                    details: Some(if expose { detail } else { GENERIC_DETAILS.into() }),
                    timestamp: Some(lexcheck_core::timestamp()),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
