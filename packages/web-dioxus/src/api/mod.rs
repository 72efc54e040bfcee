//! HTTP access to the tracker API

pub mod client;

pub use client::*;
