use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{catalogs, handlers, middleware::metrics_middleware, scans, search};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Scan ingest
        .route("/scans", post(scans::ingest_scan))
        // Catalogs
        .route("/catalogs", get(catalogs::list_catalogs))
        .route(
            "/catalogs/{identity}",
            get(catalogs::get_catalog).delete(catalogs::delete_catalog),
        )
        .route("/catalogs/{identity}/entries", get(catalogs::list_entries))
        .route("/catalogs/{identity}/rename", post(catalogs::rename_catalog))
        // Directory search
        .route("/search", get(search::search))
        .route("/stats", get(catalogs::get_stats));

    // Metrics outermost for timing, then trace
    Router::new()
        .route("/metrics", get(handlers::metrics))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .with_state(state)
}
