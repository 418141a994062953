use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Search result limit and catalog sample size are positive
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Catalog validation
    if config.catalog.search_limit == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.search_limit must be at least 1".to_string(),
        ));
    }
    if config.catalog.sample_size == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.sample_size must be at least 1".to_string(),
        ));
    }

    Ok(())
}
