//! Directory search handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use foldercat_core::SearchHit;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub total: usize,
}

/// GET /api/v1/search?q=
///
/// Case-insensitive substring search across every catalog. Terms shorter
/// than two characters return no results.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = state.service().search(&params.q)?;
    let total = results.len();
    Ok(Json(SearchResponse {
        query: params.q,
        results,
        total,
    }))
}
