//! Core trait abstractions for the extraction library.

pub mod ingestor;
