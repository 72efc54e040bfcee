//! Fetched page types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw page content as returned by an [`Ingestor`](crate::Ingestor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    /// URL that was requested
    pub url: String,

    /// URL after redirects
    pub final_url: String,

    /// HTTP status of the final response
    pub status: u16,

    /// Content-Type header, if any
    pub content_type: Option<String>,

    /// Response body
    pub html: String,

    /// When the content was fetched
    pub fetched_at: DateTime<Utc>,
}

impl RawPage {
    /// Create a new raw page with minimal fields.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            url,
            status: 200,
            content_type: Some("text/html".to_string()),
            html: html.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Set the final URL after redirects.
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = final_url.into();
        self
    }

    /// Set the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Get content length in bytes.
    pub fn content_length(&self) -> usize {
        self.html.len()
    }

    /// Whether the request was redirected.
    pub fn was_redirected(&self) -> bool {
        self.url != self.final_url
    }
}
