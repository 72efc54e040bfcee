//! CLI for running one location extraction without the HTTP server
//!
//! Uses the same configuration and activity as `POST /api/track-location`
//! and prints the result as JSON. Unlike the API, fetch failures are
//! reported with their actual cause.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use extraction::Platform;
use server_core::config::Config;
use server_core::domains::social_profile::{track_location, ExtractionRequest};
use server_core::kernel::ServerDeps;

#[derive(Parser)]
#[command(name = "track_location")]
#[command(about = "Guess the location of a social-media profile")]
struct Cli {
    /// Platform tag (instagram, facebook)
    #[arg(long, short)]
    platform: Platform,

    /// Override FETCH_TIMEOUT_SECS
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Profile URL
    url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(secs) = cli.timeout_secs {
        config.fetch = config.fetch.with_timeout(Duration::from_secs(secs));
    }

    let request = ExtractionRequest::new(cli.platform.as_str(), cli.url)?;
    let deps = ServerDeps::from_fetch_config(&config.fetch)?;

    let result = track_location(&request, &deps)
        .await
        .with_context(|| format!("Failed to fetch {}", request.url))?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
