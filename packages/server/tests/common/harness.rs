//! Test harness for integration testing.
//!
//! Each test gets a fake upstream site on a loopback port and an app
//! wired to a real `HttpIngestor`, so requests go through the same fetch
//! path as production.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use extraction::FetchConfig;
use serde_json::Value;
use server_core::kernel::ServerDeps;
use server_core::server::{build_app, TRACK_LOCATION_PATH};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use super::fixtures::upstream_router;

/// Ingestor timeout used by the harness.
pub const TEST_FETCH_TIMEOUT: Duration = Duration::from_millis(500);

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, body) = ctx.track("instagram", &ctx.upstream_url("/instagram/jane")).await;
/// }
/// ```
pub struct TestHarness {
    pub app: Router,
    upstream_addr: SocketAddr,
    upstream: JoinHandle<()>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.upstream.abort();
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind upstream listener")?;
        let upstream_addr = listener.local_addr()?;
        let router = upstream_router(TEST_FETCH_TIMEOUT * 4);
        let upstream = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let fetch = FetchConfig::new().with_timeout(TEST_FETCH_TIMEOUT);
        let deps = ServerDeps::from_fetch_config(&fetch)?;
        let app = build_app(deps, &[]);

        Ok(Self {
            app,
            upstream_addr,
            upstream,
        })
    }

    /// Absolute URL on the fake upstream.
    pub fn upstream_url(&self, path: &str) -> String {
        format!("http://{}{}", self.upstream_addr, path)
    }

    /// URL on a loopback port nothing listens on.
    pub async fn closed_port_url(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let addr = listener.local_addr().expect("probe listener has an address");
        drop(listener);
        format!("http://{}/profile", addr)
    }

    /// POST a raw body to the track-location route.
    pub async fn post_raw(&self, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(TRACK_LOCATION_PATH)
            .header(CONTENT_TYPE, "application/json")
            .body(body.into())
            .expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// POST a JSON body to the track-location route.
    pub async fn post_json(&self, body: Value) -> (StatusCode, Value) {
        self.post_raw(body.to_string()).await
    }

    /// POST `{ platform, url }`.
    pub async fn track(&self, platform: &str, url: &str) -> (StatusCode, Value) {
        self.post_json(serde_json::json!({ "platform": platform, "url": url }))
            .await
    }
}
