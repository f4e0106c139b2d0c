//! POST /api/search-eurlex: proxy a title search to EUR-Lex.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lexcheck_sync::EurLexDocument;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<EurLexDocument>,
}

pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let keyword = payload
        .ok()
        .and_then(|Json(request)| request.keyword)
        .filter(|k| !k.is_empty())
        .ok_or(ApiError::MissingKeyword)?;

    let results = state.eurlex.search(&keyword).await?;
    Ok(Json(SearchResponse { results }))
}
