//! Data types for the extraction library.

pub mod config;
pub mod document;
pub mod page;
pub mod platform;
