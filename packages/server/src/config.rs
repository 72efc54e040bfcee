use anyhow::{Context, Result};
use dotenvy::dotenv;
use extraction::FetchConfig;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Outbound profile fetch settings (user agent, timeout)
    pub fetch: FetchConfig,
    /// CORS origins; empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            fetch: FetchConfig::default(),
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let mut fetch = FetchConfig::default();
        if let Ok(secs) = env::var("FETCH_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?;
            fetch = fetch.with_timeout(Duration::from_secs(secs));
        }
        if let Ok(user_agent) = env::var("FETCH_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                fetch = fetch.with_user_agent(user_agent);
            }
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            fetch,
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
