//! Scan ingest handler.
//!
//! Scanners post either a parsed `paths` array or the raw `listing` text
//! captured from `dir /s /b /ad` or `find -type d`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use foldercat_core::{parse_listing, IngestRequest, ScanOutcome, ServiceError};
use serde::Deserialize;

use super::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IngestBody {
    pub identity_key: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub source_path: String,
    #[serde(default)]
    pub paths: Option<Vec<String>>,
    #[serde(default)]
    pub listing: Option<String>,
}

impl TryFrom<IngestBody> for IngestRequest {
    type Error = ServiceError;

    fn try_from(body: IngestBody) -> Result<Self, Self::Error> {
        let paths = match (body.paths, body.listing) {
            (Some(_), Some(_)) => {
                return Err(ServiceError::Validation(
                    "provide either paths or listing, not both".to_string(),
                ))
            }
            (Some(paths), None) => paths,
            (None, Some(listing)) => parse_listing(&listing),
            (None, None) => Vec::new(),
        };
        Ok(IngestRequest::new(
            body.identity_key,
            body.display_name.unwrap_or_default(),
            body.source_path,
            paths,
        ))
    }
}

/// POST /api/v1/scans
///
/// Record a completed scan. Returns 201 with the stored entry count.
pub async fn ingest_scan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<IngestBody>,
) -> Result<(StatusCode, Json<ScanOutcome>), ApiError> {
    let request = IngestRequest::try_from(body)?;
    let outcome = state.service().ingest_scan(request)?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
