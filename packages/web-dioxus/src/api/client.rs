//! Client for the track-location endpoint

use crate::types::{LocationResult, ProfilePlatform, TrackLocationRequest, TrackLocationResponse};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/track-location";

/// `TRACKER_API_URL` at build time, else the local default.
pub fn get_api_url() -> &'static str {
    option_env!("TRACKER_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Error type for track-location requests
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct LocationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl LocationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Client pointed at [`get_api_url`].
    pub fn from_config() -> Self {
        Self::new(get_api_url())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one profile URL. Error bodies (400/500) are decoded like any
    /// other response; transport and decode failures become "Network error".
    pub async fn track(&self, platform: ProfilePlatform, url: String) -> LocationResult {
        match self.request(platform, &url).await {
            Ok(response) => LocationResult::from_response(platform, url, response),
            Err(e) => {
                tracing::warn!(
                    platform = platform.tag(),
                    endpoint = %self.endpoint,
                    error = %e,
                    "Track location request failed"
                );
                LocationResult::network_error(platform, url)
            }
        }
    }

    async fn request(
        &self,
        platform: ProfilePlatform,
        url: &str,
    ) -> Result<TrackLocationResponse, ClientError> {
        let request = TrackLocationRequest {
            platform,
            url: url.to_string(),
        };

        let response = self.client.post(&self.endpoint).json(&request).send().await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let client = LocationClient::new(DEFAULT_API_URL);
        assert_eq!(client.endpoint(), "http://localhost:8080/api/track-location");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let client = LocationClient::new("http://127.0.0.1:9/api/track-location");
        let result = client
            .track(ProfilePlatform::Instagram, "https://instagram.com/jane".to_string())
            .await;

        assert_eq!(result.error.as_deref(), Some("Network error"));
        assert_eq!(result.url, "https://instagram.com/jane");
        assert!(result.location.is_none());
    }
}
