//! Mock ingestor for testing.
//!
//! Provides a configurable mock implementation of the Ingestor trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{CrawlError, CrawlResult};
use crate::traits::ingestor::Ingestor;
use crate::types::page::RawPage;

/// Canned outcome for a URL.
#[derive(Debug, Clone)]
enum MockResponse {
    Page(RawPage),
    Status(u16),
    Timeout,
}

/// Mock ingestor for testing.
///
/// Unknown URLs fail with an HTTP error, like an unreachable host.
///
/// # Example
///
/// ```rust
/// use extraction::{MockIngestor, RawPage};
///
/// let mock = MockIngestor::new()
///     .with_page(RawPage::new("https://example.com/u", "<html></html>"));
/// assert_eq!(mock.fetch_call_count(), 0);
/// ```
#[derive(Default)]
pub struct MockIngestor {
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockIngestor {
    /// Create a new empty mock ingestor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page that will be returned for its URL.
    pub fn add_page(&self, page: RawPage) {
        let mut responses = self.responses.write().unwrap();
        responses.insert(page.url.clone(), MockResponse::Page(page));
    }

    /// Create a mock with a pre-configured page (builder pattern).
    pub fn with_page(self, page: RawPage) -> Self {
        self.add_page(page);
        self
    }

    /// Create a mock with an HTML body served at `url`.
    pub fn with_html(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.with_page(RawPage::new(url, html))
    }

    /// Make `url` answer with a non-success status.
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), MockResponse::Status(status));
        self
    }

    /// Make `url` time out.
    pub fn with_timeout(self, url: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), MockResponse::Timeout);
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were requested via fetch.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }
}

impl Clone for MockIngestor {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            fetch_calls: Arc::clone(&self.fetch_calls),
        }
    }
}

#[async_trait]
impl Ingestor for MockIngestor {
    async fn fetch(&self, url: &str) -> CrawlResult<RawPage> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        let response = self.responses.read().unwrap().get(url).cloned();
        match response {
            Some(MockResponse::Page(page)) => Ok(page),
            Some(MockResponse::Status(status)) => Err(CrawlError::Status {
                url: url.to_string(),
                status,
            }),
            Some(MockResponse::Timeout) => Err(CrawlError::Timeout {
                url: url.to_string(),
            }),
            None => Err(CrawlError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("no mock response for {}", url),
            )))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
