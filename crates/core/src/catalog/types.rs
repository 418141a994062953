//! Types for the volume catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Internal identifier of a catalog row.
pub type CatalogId = i64;

/// A cataloged volume: one row per distinct physical volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Store-assigned identifier, stable for the catalog's lifetime.
    pub id: CatalogId,
    /// Volume identity (e.g. a volume serial). Unique, never changes.
    pub identity_key: String,
    /// User-facing label.
    pub display_name: String,
    /// Last-known mount or drive path.
    pub source_path: String,
    /// When the volume was last scanned.
    pub scanned_at: DateTime<Utc>,
    /// Number of directory entries in the current snapshot.
    pub entry_count: u64,
    /// When the catalog was first created.
    pub created_at: DateTime<Utc>,
}

/// A directory matched by a catalog-wide search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryMatch {
    pub identity_key: String,
    pub display_name: String,
    pub source_path: String,
    /// Full raw path of the matching directory.
    pub path: String,
    pub scanned_at: DateTime<Utc>,
}

/// Catalog statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of cataloged volumes.
    pub total_catalogs: u64,
    /// Number of directory entries across all volumes.
    pub total_entries: u64,
    /// Most recent scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_scan_at: Option<DateTime<Utc>>,
    /// Size of the database file (0 for in-memory stores).
    pub database_size_bytes: u64,
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<rusqlite::Error> for CatalogError {
    fn from(e: rusqlite::Error) -> Self {
        CatalogError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_serialization() {
        let catalog = Catalog {
            id: 7,
            identity_key: "44FA-62AA".to_string(),
            display_name: "Photos Backup".to_string(),
            source_path: "E:\\".to_string(),
            scanned_at: Utc::now(),
            entry_count: 1200,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_catalog_stats_skips_missing_latest_scan() {
        let stats = CatalogStats {
            total_catalogs: 0,
            total_entries: 0,
            latest_scan_at: None,
            database_size_bytes: 0,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("latest_scan_at"));
        assert!(json.contains("total_catalogs"));
    }

    #[test]
    fn test_database_error_from_rusqlite() {
        let err: CatalogError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, CatalogError::Database(_)));
    }
}
