//! Volume catalog - the durable record of each volume's directory tree.
//!
//! A catalog is keyed by the volume's identity (its serial), never by its
//! label, so renaming a disk or plugging it into another drive letter still
//! resolves to the same catalog on rescan.

mod sqlite;
mod types;

pub use sqlite::{default_display_name, SqliteCatalogStore, MIN_SEARCH_TERM_LEN};
pub use types::*;

/// Trait for catalog storage.
pub trait CatalogStore: Send + Sync {
    /// Create or refresh the catalog for `identity_key`.
    ///
    /// Runs as one transaction. The full directory set is replaced, never
    /// merged. `display_name` is only applied when it is `Some` and non-blank;
    /// a brand new catalog without a name gets [`default_display_name`].
    fn upsert_catalog(
        &self,
        identity_key: &str,
        display_name: Option<&str>,
        source_path: &str,
        paths: &[String],
    ) -> Result<CatalogId, CatalogError>;

    /// Get a catalog by its volume identity.
    fn get_catalog_by_identity(&self, identity_key: &str) -> Result<Catalog, CatalogError>;

    /// Get a catalog by its internal id.
    fn get_catalog_by_id(&self, id: CatalogId) -> Result<Catalog, CatalogError>;

    /// All catalogs, most recently scanned first.
    fn list_catalogs(&self) -> Result<Vec<Catalog>, CatalogError>;

    /// Directory paths of a catalog in lexicographic order, at most `limit` of them.
    ///
    /// An unknown id yields an empty list.
    fn list_directory_entries(
        &self,
        catalog_id: CatalogId,
        limit: Option<usize>,
    ) -> Result<Vec<String>, CatalogError>;

    /// Case-insensitive substring search over every directory of every catalog.
    ///
    /// Ordered by display name, then path. Terms shorter than
    /// [`MIN_SEARCH_TERM_LEN`] characters return nothing.
    fn search_directories(&self, term: &str) -> Result<Vec<DirectoryMatch>, CatalogError>;

    /// Delete a catalog and all its entries. Returns false if it did not exist.
    fn delete_catalog(&self, identity_key: &str) -> Result<bool, CatalogError>;

    /// Change only the display name. Returns false if the catalog did not exist.
    fn rename_catalog(&self, identity_key: &str, new_display_name: &str)
        -> Result<bool, CatalogError>;

    /// Get catalog statistics.
    fn stats(&self) -> Result<CatalogStats, CatalogError>;
}
