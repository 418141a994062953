//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Scan ingestion (outcomes, directories stored)
//! - Directory search (queries, result sizes)
//! - Catalog maintenance and storage failures

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Ingest Metrics
// =============================================================================

/// Scan ingests by result.
pub static INGESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("foldercat_ingests_total", "Total scan ingests"),
        &["result"], // "success", "rejected", "failed"
    )
    .unwrap()
});

/// Directory entries written by successful ingests.
pub static ENTRIES_INGESTED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "foldercat_entries_ingested_total",
        "Total directory entries stored by ingests",
    )
    .unwrap()
});

// =============================================================================
// Search Metrics
// =============================================================================

/// Search queries served.
pub static SEARCH_QUERIES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("foldercat_search_queries_total", "Total directory searches").unwrap()
});

/// Matches found per search, before the result cap.
pub static SEARCH_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "foldercat_search_results",
            "Number of matching directories per search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 500.0, 1000.0]),
    )
    .unwrap()
});

// =============================================================================
// Maintenance Metrics
// =============================================================================

/// Catalogs deleted.
pub static CATALOGS_DELETED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("foldercat_catalogs_deleted_total", "Total catalogs deleted").unwrap()
});

/// Storage failures by service operation.
pub static STORAGE_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "foldercat_storage_failures_total",
            "Catalog storage failures",
        ),
        &["operation"],
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(INGESTS_TOTAL.clone()),
        Box::new(ENTRIES_INGESTED.clone()),
        Box::new(SEARCH_QUERIES.clone()),
        Box::new(SEARCH_RESULTS.clone()),
        Box::new(CATALOGS_DELETED.clone()),
        Box::new(STORAGE_FAILURES.clone()),
    ]
}
