//! GET /api/legal-updates?jurisdiction=EU|BE: recent legal updates feed.

use axum::Json;
use axum::extract::Query;
use lexcheck_core::{Jurisdiction, LegalUpdate, legal_updates};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct UpdatesQuery {
    pub jurisdiction: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdatesResponse {
    pub jurisdiction: Jurisdiction,
    pub updates: Vec<LegalUpdate>,
}

pub async fn updates(Query(query): Query<UpdatesQuery>) -> Result<Json<UpdatesResponse>, ApiError> {
    let jurisdiction = match query.jurisdiction.as_deref() {
        None | Some("") => Jurisdiction::Eu,
        Some(code) => code
            .parse::<Jurisdiction>()
            .map_err(|_| ApiError::invalid_jurisdiction())?,
    };
    let today = chrono::Utc::now().date_naive();
    Ok(Json(UpdatesResponse {
        jurisdiction,
        updates: legal_updates(jurisdiction, today),
    }))
}
