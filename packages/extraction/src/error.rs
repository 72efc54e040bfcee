//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during extraction operations.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Platform tag is not one of the supported networks
    #[error("unknown platform: {tag}")]
    UnknownPlatform { tag: String },
}

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP request failed (connect, DNS, TLS, client construction)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Upstream answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Request exceeded the configured timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Response body could not be read
    #[error("failed to read body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CrawlError {
    /// Classify a reqwest failure for `url`.
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CrawlError::Timeout {
                url: url.to_string(),
            }
        } else if error.is_body() || error.is_decode() {
            CrawlError::Body(Box::new(error))
        } else {
            CrawlError::Http(Box::new(error))
        }
    }
}

/// Result type alias for fetch operations.
pub type CrawlResult<T> = std::result::Result<T, CrawlError>;
