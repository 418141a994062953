//! Common test utilities for E2E testing.
//!
//! This module provides a test fixture that creates an in-process server
//! backed by a temporary SQLite catalog, or by a store that fails every call.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use foldercat_core::{
    testing::FailingCatalogStore, CatalogConfig, CatalogService, CatalogStore, Config,
    DatabaseConfig, SqliteCatalogStore,
};
use foldercat_server::{api::create_router, state::AppState};

/// Test fixture for E2E testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_scan_ingest() {
///     let fixture = TestFixture::new();
///
///     let response = fixture.post("/api/v1/scans", json!({
///         "identity_key": "SN-1",
///         "source_path": "D:\\",
///         "paths": ["D:\\Photos"]
///     })).await;
///
///     assert_eq!(response.status, 201);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Temporary directory holding the test database
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture backed by a fresh file-based catalog.
    pub fn new() -> Self {
        Self::with_catalog_config(CatalogConfig::default())
    }

    /// Create a fixture with custom search limit or sample size.
    pub fn with_catalog_config(catalog: CatalogConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let store = Arc::new(
            SqliteCatalogStore::open(&db_path).expect("Failed to create catalog store"),
        );
        Self::build(store, catalog, temp_dir)
    }

    /// Create a fixture whose store fails every operation.
    pub fn with_failing_store() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self::build(
            Arc::new(FailingCatalogStore::new()),
            CatalogConfig::default(),
            temp_dir,
        )
    }

    fn build(store: Arc<dyn CatalogStore>, catalog: CatalogConfig, temp_dir: TempDir) -> Self {
        let config = Config {
            database: DatabaseConfig {
                path: temp_dir.path().join("test.db"),
            },
            catalog: catalog.clone(),
            ..Config::default()
        };

        let service = CatalogService::new(store, catalog);
        let state = Arc::new(AppState::new(config, service));
        let router = create_router(state);

        Self { router, temp_dir }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a GET request and return the raw text body.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
