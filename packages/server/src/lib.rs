// Profile Location Tracker - API Core
//
// Fetches social-media profile pages server-side and guesses a location
// from their markup. Heuristics live in the `extraction` crate; this crate
// owns validation, the HTTP surface and configuration.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
