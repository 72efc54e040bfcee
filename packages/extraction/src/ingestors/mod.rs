//! Ingestor implementations.
//!
//! - `HttpIngestor` - Single-page HTTP fetch with a browser identity
//! - `MockIngestor` - For testing

mod http;
mod mock;

pub use http::HttpIngestor;
pub use mock::MockIngestor;

// Re-export from traits for convenience
pub use crate::traits::ingestor::Ingestor;
pub use crate::types::page::RawPage;
