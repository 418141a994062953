use foldercat_core::{CatalogService, Config};

/// Shared application state
pub struct AppState {
    config: Config,
    service: CatalogService,
}

impl AppState {
    pub fn new(config: Config, service: CatalogService) -> Self {
        Self { config, service }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> &CatalogService {
        &self.service
    }
}
