//! Profile Location Tracker - Dioxus Fullstack Web Application
//!
//! A form that submits Instagram and Facebook profile URLs to the tracker
//! API and renders the extracted locations.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Point the form at another API at build time:
//! ```bash
//! TRACKER_API_URL=https://tracker.example/api/track-location dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
