pub mod catalog;
pub mod config;
pub mod listing;
pub mod metrics;
pub mod service;
pub mod testing;

pub use catalog::{
    Catalog, CatalogError, CatalogId, CatalogStats, CatalogStore, DirectoryMatch,
    SqliteCatalogStore,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    DatabaseConfig, ServerConfig,
};
pub use listing::parse_listing;
pub use service::{
    CatalogDetail, CatalogService, IngestRequest, ScanOutcome, SearchHit, ServiceError,
};
