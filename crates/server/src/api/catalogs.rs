//! Catalog API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use foldercat_core::{Catalog, CatalogDetail, CatalogStats};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CatalogListResponse {
    pub catalogs: Vec<Catalog>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub identity_key: String,
    pub entries: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub new_name: String,
}

#[derive(Debug, Serialize)]
pub struct RenameResponse {
    pub identity_key: String,
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/catalogs
///
/// List every catalog, most recently scanned first.
pub async fn list_catalogs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogListResponse>, ApiError> {
    let catalogs = state.service().list_catalogs()?;
    let total = catalogs.len();
    Ok(Json(CatalogListResponse { catalogs, total }))
}

/// GET /api/v1/stats
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogStats>, ApiError> {
    Ok(Json(state.service().stats()?))
}

/// GET /api/v1/catalogs/{identity}
///
/// Catalog metadata with a sample of its directories.
pub async fn get_catalog(
    State(state): State<Arc<AppState>>,
    Path(identity): Path<String>,
) -> Result<Json<CatalogDetail>, ApiError> {
    Ok(Json(state.service().view_catalog(&identity)?))
}

/// GET /api/v1/catalogs/{identity}/entries
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Path(identity): Path<String>,
) -> Result<Json<EntryListResponse>, ApiError> {
    let entries = state.service().list_entries(&identity)?;
    let total = entries.len();
    Ok(Json(EntryListResponse {
        identity_key: identity.trim().to_string(),
        entries,
        total,
    }))
}

/// DELETE /api/v1/catalogs/{identity}
///
/// Remove a catalog and every directory recorded for it.
pub async fn delete_catalog(
    State(state): State<Arc<AppState>>,
    Path(identity): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service().delete_catalog(&identity)?;
    Ok(Json(SuccessResponse {
        message: format!("Deleted catalog {}", identity.trim()),
    }))
}

/// POST /api/v1/catalogs/{identity}/rename
pub async fn rename_catalog(
    State(state): State<Arc<AppState>>,
    Path(identity): Path<String>,
    Json(request): Json<RenameRequest>,
) -> Result<Json<RenameResponse>, ApiError> {
    let display_name = state
        .service()
        .rename_catalog(&identity, &request.new_name)?;
    Ok(Json(RenameResponse {
        identity_key: identity.trim().to_string(),
        display_name,
    }))
}
