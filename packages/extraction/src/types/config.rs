//! Configuration types for fetching profile pages.

use std::time::Duration;

/// Desktop Chrome identity sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default outbound timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum redirects followed before giving up.
pub const MAX_REDIRECTS: usize = 5;

/// Configuration for outbound page fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// User-Agent header value.
    ///
    /// Profile pages serve very different markup to non-browser agents, so
    /// this defaults to a desktop browser identity.
    pub user_agent: String,

    /// Whole-request timeout (connect + headers + body).
    ///
    /// Default: 10 seconds.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
