//! Server dependencies (using traits for testability)
//!
//! This module provides the dependency container handed to every route and
//! activity. The outbound fetcher sits behind the `Ingestor` trait so tests
//! can swap in canned pages.

use anyhow::{Context, Result};
use std::sync::Arc;

use extraction::{FetchConfig, HttpIngestor, Ingestor};

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    /// Fetches profile pages (HTTP in production, mock in tests)
    pub ingestor: Arc<dyn Ingestor>,
}

impl ServerDeps {
    pub fn new(ingestor: Arc<dyn Ingestor>) -> Self {
        Self { ingestor }
    }

    /// Production dependencies: a shared HTTP client with the configured
    /// user agent and timeout.
    pub fn from_fetch_config(fetch: &FetchConfig) -> Result<Self> {
        let ingestor =
            HttpIngestor::new(fetch.clone()).context("Failed to create HTTP client")?;
        tracing::info!(
            user_agent = %fetch.user_agent,
            timeout_secs = fetch.timeout.as_secs(),
            "HTTP ingestor ready"
        );
        Ok(Self::new(Arc::new(ingestor)))
    }
}
