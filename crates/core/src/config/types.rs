use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("foldercat.db")
}

/// Catalog service tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Maximum hits returned by a directory search.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    /// Number of directories shown when viewing a catalog.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
            sample_size: default_sample_size(),
        }
    }
}

fn default_search_limit() -> usize {
    100
}

fn default_sample_size() -> usize {
    10
}
