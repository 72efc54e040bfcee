//! Profile Location Extraction Library
//!
//! Fetches a social-media profile page and guesses a location string from its
//! markup using per-platform heuristic chains.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{extract_location, FetchConfig, HttpIngestor, Ingestor, Platform};
//!
//! let ingestor = HttpIngestor::new(FetchConfig::default())?;
//! let page = ingestor.fetch("https://www.instagram.com/someone/").await?;
//! let location = extract_location(Some(Platform::Instagram), &page.html);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The `Ingestor` abstraction
//! - [`ingestors`] - HTTP and mock ingestors
//! - [`types`] - Platform, fetch config, raw page, parsed document
//! - [`heuristics`] - Ordered per-platform location extractors

pub mod error;
pub mod heuristics;
pub mod ingestors;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CrawlError, CrawlResult, ExtractionError};
pub use heuristics::{extract_location, ExtractFn, Extractor, LocationExtractor};
pub use ingestors::{HttpIngestor, MockIngestor};
pub use traits::ingestor::Ingestor;
pub use types::{
    config::{FetchConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT},
    document::ProfileDocument,
    page::RawPage,
    platform::Platform,
};
