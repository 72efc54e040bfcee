//! HTTP-based ingestor implementation.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::{debug, warn};
use url::Url;

use crate::error::{CrawlError, CrawlResult};
use crate::traits::ingestor::Ingestor;
use crate::types::config::{FetchConfig, MAX_REDIRECTS};
use crate::types::page::RawPage;

/// HTTP ingestor that fetches one page with a browser identity.
///
/// No JavaScript rendering: what the server returns is what gets parsed.
///
/// # Example
///
/// ```rust,ignore
/// use extraction::{FetchConfig, HttpIngestor};
/// use std::time::Duration;
///
/// let ingestor = HttpIngestor::new(FetchConfig::new().with_timeout(Duration::from_secs(5)))?;
/// ```
pub struct HttpIngestor {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpIngestor {
    /// Create a new HTTP ingestor from a fetch configuration.
    pub fn new(config: FetchConfig) -> CrawlResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| CrawlError::Http(Box::new(e)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Ingestor for HttpIngestor {
    async fn fetch(&self, url: &str) -> CrawlResult<RawPage> {
        let parsed = Url::parse(url).map_err(|_| CrawlError::InvalidUrl {
            url: url.to_string(),
        })?;

        debug!(url = %url, timeout_ms = self.config.timeout.as_millis() as u64, "HTTP fetch starting");
        let response = self.client.get(parsed).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            CrawlError::from_reqwest(url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Upstream returned non-success status");
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let html = response
            .text()
            .await
            .map_err(|e| CrawlError::from_reqwest(url, e))?;

        debug!(
            url = %url,
            final_url = %final_url,
            content_length = html.len(),
            "Page fetched successfully"
        );

        let mut page = RawPage::new(url, html)
            .with_final_url(final_url)
            .with_status(status.as_u16())
            .with_fetched_at(Utc::now());
        if let Some(content_type) = content_type {
            page = page.with_content_type(content_type);
        }

        Ok(page)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_keeps_config() {
        let config = FetchConfig::new().with_timeout(Duration::from_secs(3));
        let ingestor = HttpIngestor::new(config.clone()).unwrap();
        assert_eq!(ingestor.config, config);
        assert_eq!(ingestor.name(), "http");
    }

    #[tokio::test]
    async fn test_fetch_rejects_relative_url() {
        let ingestor = HttpIngestor::new(FetchConfig::default()).unwrap();
        let err = ingestor.fetch("not-a-url").await.unwrap_err();
        assert!(matches!(err, CrawlError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_fails() {
        let ingestor =
            HttpIngestor::new(FetchConfig::new().with_timeout(Duration::from_secs(2))).unwrap();
        // Port 9 (discard) on loopback is closed in test environments.
        let result = ingestor.fetch("http://127.0.0.1:9/profile").await;
        assert!(result.is_err());
    }
}
