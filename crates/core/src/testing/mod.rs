//! Testing utilities for exercising the catalog service without a healthy database.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use foldercat_core::testing::FailingCatalogStore;
//! use foldercat_core::{CatalogConfig, CatalogService};
//!
//! let service = CatalogService::new(Arc::new(FailingCatalogStore::new()), CatalogConfig::default());
//! assert!(service.list_catalogs().is_err());
//! ```

mod failing_store;

pub use failing_store::FailingCatalogStore;
