//! Ingestor trait for pluggable page fetching.
//!
//! The server holds an `Arc<dyn Ingestor>`; production uses
//! [`HttpIngestor`](crate::HttpIngestor), tests use
//! [`MockIngestor`](crate::MockIngestor).
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{FetchConfig, HttpIngestor, Ingestor};
//!
//! let ingestor = HttpIngestor::new(FetchConfig::default())?;
//! let page = ingestor.fetch("https://www.instagram.com/someone/").await?;
//! ```

use async_trait::async_trait;

use crate::error::CrawlResult;
use crate::types::page::RawPage;

/// Fetches a single page by URL.
#[async_trait]
pub trait Ingestor: Send + Sync {
    /// Fetch `url`, failing on transport errors, timeouts and non-2xx
    /// responses.
    async fn fetch(&self, url: &str) -> CrawlResult<RawPage>;

    /// Short name for logs.
    fn name(&self) -> &str;
}
