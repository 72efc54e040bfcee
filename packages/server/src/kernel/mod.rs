//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;

// Re-export from extraction library for easy access
pub use extraction::{FetchConfig, HttpIngestor, Ingestor, MockIngestor, RawPage};

pub use deps::ServerDeps;
pub use test_dependencies::TestDependencies;
