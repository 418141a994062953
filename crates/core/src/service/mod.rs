//! Catalog service - validation and translation between scan requests and the store.
//!
//! The service never touches the database itself. It checks inputs, calls the
//! [`CatalogStore`], caps and reshapes results, and turns store errors into
//! [`ServiceError`]s that carry the operation and volume but not the raw
//! database message.

mod types;
mod validate;

pub use types::*;
pub use validate::{
    optional_label, validate_display_name, validate_identity_key, MAX_NAME_LEN,
    RESERVED_NAME_CHARS,
};

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::catalog::{Catalog, CatalogError, CatalogStats, CatalogStore};
use crate::config::CatalogConfig;
use crate::metrics;

/// Facade over a [`CatalogStore`].
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Record a completed scan, creating or refreshing the volume's catalog.
    pub fn ingest_scan(&self, request: IngestRequest) -> Result<ScanOutcome, ServiceError> {
        let identity_key = validate_identity_key(&request.identity_key).map_err(|e| {
            warn!(source_path = %request.source_path, "Rejected scan without volume identity");
            metrics::INGESTS_TOTAL.with_label_values(&["rejected"]).inc();
            e
        })?;
        let label = optional_label(&request.display_name);

        let catalog_id = self
            .store
            .upsert_catalog(identity_key, label, &request.source_path, &request.paths)
            .map_err(|e| {
                metrics::INGESTS_TOTAL.with_label_values(&["failed"]).inc();
                storage_failure("ingest", Some(identity_key), e)
            })?;

        let entry_count = request.paths.len() as u64;
        metrics::INGESTS_TOTAL.with_label_values(&["success"]).inc();
        metrics::ENTRIES_INGESTED.inc_by(entry_count);
        info!(identity_key, catalog_id, entry_count, "Scan ingested");

        Ok(ScanOutcome {
            identity_key: identity_key.to_string(),
            catalog_id,
            entry_count,
        })
    }

    /// Search every catalog, returning at most `search_limit` hits.
    pub fn search(&self, term: &str) -> Result<Vec<SearchHit>, ServiceError> {
        let matches = self
            .store
            .search_directories(term)
            .map_err(|e| storage_failure("search", None, e))?;

        metrics::SEARCH_QUERIES.inc();
        metrics::SEARCH_RESULTS.observe(matches.len() as f64);
        debug!(term, total = matches.len(), limit = self.config.search_limit, "Search served");

        Ok(matches
            .into_iter()
            .take(self.config.search_limit)
            .map(SearchHit::from)
            .collect())
    }

    /// Catalog metadata plus the first `sample_size` directories.
    pub fn view_catalog(&self, identity_key: &str) -> Result<CatalogDetail, ServiceError> {
        let catalog = self.find_catalog(identity_key, "view")?;
        let sample_entries = self
            .store
            .list_directory_entries(catalog.id, Some(self.config.sample_size))
            .map_err(|e| storage_failure("view", Some(&catalog.identity_key), e))?;

        Ok(CatalogDetail {
            catalog,
            sample_entries,
        })
    }

    /// Every catalog, most recently scanned first.
    pub fn list_catalogs(&self) -> Result<Vec<Catalog>, ServiceError> {
        self.store
            .list_catalogs()
            .map_err(|e| storage_failure("list", None, e))
    }

    /// Full directory listing of one volume.
    pub fn list_entries(&self, identity_key: &str) -> Result<Vec<String>, ServiceError> {
        let catalog = self.find_catalog(identity_key, "list entries")?;
        self.store
            .list_directory_entries(catalog.id, None)
            .map_err(|e| storage_failure("list entries", Some(&catalog.identity_key), e))
    }

    /// Delete a catalog and all its directories.
    pub fn delete_catalog(&self, identity_key: &str) -> Result<(), ServiceError> {
        let identity_key = validate_identity_key(identity_key)?;

        let deleted = self
            .store
            .delete_catalog(identity_key)
            .map_err(|e| storage_failure("delete", Some(identity_key), e))?;

        if !deleted {
            return Err(ServiceError::NotFound(identity_key.to_string()));
        }

        metrics::CATALOGS_DELETED.inc();
        Ok(())
    }

    /// Rename a catalog, returning the stored name.
    pub fn rename_catalog(
        &self,
        identity_key: &str,
        new_name: &str,
    ) -> Result<String, ServiceError> {
        let identity_key = validate_identity_key(identity_key)?;
        let new_name = validate_display_name(new_name).map_err(|e| {
            warn!(identity_key, new_name, "Rejected catalog name");
            e
        })?;

        let renamed = self
            .store
            .rename_catalog(identity_key, new_name)
            .map_err(|e| storage_failure("rename", Some(identity_key), e))?;

        if !renamed {
            return Err(ServiceError::NotFound(identity_key.to_string()));
        }

        Ok(new_name.to_string())
    }

    /// Catalog statistics.
    pub fn stats(&self) -> Result<CatalogStats, ServiceError> {
        self.store
            .stats()
            .map_err(|e| storage_failure("stats", None, e))
    }

    fn find_catalog(&self, identity_key: &str, operation: &'static str) -> Result<Catalog, ServiceError> {
        let identity_key = validate_identity_key(identity_key)?;

        match self.store.get_catalog_by_identity(identity_key) {
            Ok(catalog) => Ok(catalog),
            Err(CatalogError::NotFound(_)) => Err(ServiceError::NotFound(identity_key.to_string())),
            Err(e) => Err(storage_failure(operation, Some(identity_key), e)),
        }
    }
}

/// Log a store failure with its context and hide the engine message from callers.
fn storage_failure(
    operation: &'static str,
    identity_key: Option<&str>,
    err: CatalogError,
) -> ServiceError {
    error!(operation, identity_key = identity_key.unwrap_or("-"), error = %err, "Catalog storage failure");
    metrics::STORAGE_FAILURES.with_label_values(&[operation]).inc();
    ServiceError::Storage {
        operation,
        identity_key: identity_key.map(str::to_string),
    }
}
