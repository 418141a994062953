//! Request, outcome and error types for the catalog service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogId, DirectoryMatch};

/// A completed scan handed over by an external scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestRequest {
    /// Volume identity (serial). Must not be blank.
    pub identity_key: String,
    /// Volume label. Blank means "no label available".
    #[serde(default)]
    pub display_name: String,
    /// Drive or mount path the volume was scanned from.
    pub source_path: String,
    /// Raw directory paths, stored verbatim.
    #[serde(default)]
    pub paths: Vec<String>,
}

impl IngestRequest {
    pub fn new(
        identity_key: impl Into<String>,
        display_name: impl Into<String>,
        source_path: impl Into<String>,
        paths: Vec<String>,
    ) -> Self {
        Self {
            identity_key: identity_key.into(),
            display_name: display_name.into(),
            source_path: source_path.into(),
            paths,
        }
    }
}

/// Result of a successful ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub identity_key: String,
    pub catalog_id: CatalogId,
    pub entry_count: u64,
}

/// A search result as shown to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub identity_key: String,
    pub display_name: String,
    pub source_path: String,
    /// Full raw path.
    pub path: String,
    /// Last path segment, for display.
    pub folder_name: String,
    pub scanned_at: DateTime<Utc>,
}

impl From<DirectoryMatch> for SearchHit {
    fn from(m: DirectoryMatch) -> Self {
        let folder_name = folder_name(&m.path).to_string();
        Self {
            identity_key: m.identity_key,
            display_name: m.display_name,
            source_path: m.source_path,
            path: m.path,
            folder_name,
            scanned_at: m.scanned_at,
        }
    }
}

/// Last segment of a Windows or POSIX path. Trailing separators are ignored.
pub fn folder_name(path: &str) -> &str {
    let is_separator = |c: char| c == '\\' || c == '/';
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return path;
    }
    trimmed.rsplit(is_separator).next().unwrap_or(trimmed)
}

/// Catalog metadata plus a short sample of its directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDetail {
    #[serde(flatten)]
    pub catalog: Catalog,
    /// First entries in lexicographic order.
    pub sample_entries: Vec<String>,
}

/// Errors surfaced to service callers.
///
/// Storage failures are deliberately opaque; the underlying database message
/// is logged, not returned.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Catalog not found: {0}")]
    NotFound(String),

    #[error("Catalog {operation} failed{}", identity_suffix(.identity_key))]
    Storage {
        operation: &'static str,
        identity_key: Option<String>,
    },
}

fn identity_suffix(identity_key: &Option<String>) -> String {
    identity_key
        .as_deref()
        .map(|key| format!(" for volume {key}"))
        .unwrap_or_default()
}
