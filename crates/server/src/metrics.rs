//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the foldercat server:
//! - HTTP request metrics (latency, counts)
//! - Catalog size (collected on scrape)
//! - Core ingest and search metrics, registered from `foldercat_core::metrics`

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use regex_lite::Regex;
use tracing::warn;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "foldercat_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("foldercat_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "foldercat_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Catalog Metrics (collected dynamically)
// =============================================================================

/// Catalogs stored.
pub static CATALOGS_TOTAL: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("foldercat_catalogs", "Number of volume catalogs").unwrap()
});

/// Directory entries stored across all catalogs.
pub static DIRECTORY_ENTRIES_TOTAL: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "foldercat_directory_entries",
        "Number of directory entries across all catalogs",
    )
    .unwrap()
});

/// Database size on disk.
pub static DATABASE_SIZE_BYTES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "foldercat_database_size_bytes",
        "Catalog database size on disk in bytes",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Catalog
    registry.register(Box::new(CATALOGS_TOTAL.clone())).unwrap();
    registry
        .register(Box::new(DIRECTORY_ENTRIES_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(DATABASE_SIZE_BYTES.clone()))
        .unwrap();

    // Core metrics (ingest, search, storage failures)
    for metric in foldercat_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        warn!(error = %e, "Failed to encode metrics");
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so the catalog gauges reflect the database.
pub fn collect_dynamic_metrics(state: &crate::state::AppState) {
    if let Ok(stats) = state.service().stats() {
        CATALOGS_TOTAL.set(stats.total_catalogs as i64);
        DIRECTORY_ENTRIES_TOTAL.set(stats.total_entries as i64);
        DATABASE_SIZE_BYTES.set(stats.database_size_bytes as i64);
    }
}

static CATALOG_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/catalogs/([^/]+)").unwrap());

/// Normalize a path for metric labels (replace volume identities with a placeholder).
pub fn normalize_path(path: &str) -> String {
    CATALOG_SEGMENT
        .replace_all(path, "/catalogs/{identity}")
        .to_string()
}
