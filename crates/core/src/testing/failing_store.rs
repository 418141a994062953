//! Catalog store that fails every call.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::catalog::{
    Catalog, CatalogError, CatalogId, CatalogStats, CatalogStore, DirectoryMatch,
};

/// A [`CatalogStore`] whose every operation returns a database error.
///
/// Counts calls so tests can assert the service did not retry.
#[derive(Debug, Default)]
pub struct FailingCatalogStore {
    calls: AtomicUsize,
}

impl FailingCatalogStore {
    /// Engine message carried by every error.
    pub const MESSAGE: &'static str = "disk I/O error";

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::Database(Self::MESSAGE.to_string()))
    }
}

impl CatalogStore for FailingCatalogStore {
    fn upsert_catalog(
        &self,
        _identity_key: &str,
        _display_name: Option<&str>,
        _source_path: &str,
        _paths: &[String],
    ) -> Result<CatalogId, CatalogError> {
        self.fail()
    }

    fn get_catalog_by_identity(&self, _identity_key: &str) -> Result<Catalog, CatalogError> {
        self.fail()
    }

    fn get_catalog_by_id(&self, _id: CatalogId) -> Result<Catalog, CatalogError> {
        self.fail()
    }

    fn list_catalogs(&self) -> Result<Vec<Catalog>, CatalogError> {
        self.fail()
    }

    fn list_directory_entries(
        &self,
        _catalog_id: CatalogId,
        _limit: Option<usize>,
    ) -> Result<Vec<String>, CatalogError> {
        self.fail()
    }

    fn search_directories(&self, _term: &str) -> Result<Vec<DirectoryMatch>, CatalogError> {
        self.fail()
    }

    fn delete_catalog(&self, _identity_key: &str) -> Result<bool, CatalogError> {
        self.fail()
    }

    fn rename_catalog(&self, _identity_key: &str, _new_name: &str) -> Result<bool, CatalogError> {
        self.fail()
    }

    fn stats(&self) -> Result<CatalogStats, CatalogError> {
        self.fail()
    }
}
