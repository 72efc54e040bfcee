use extraction::Platform;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Raw `POST /api/track-location` body.
///
/// Fields stay untyped so that a missing or non-string `url` is a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackLocationInput {
    #[serde(default)]
    pub platform: Value,
    #[serde(default)]
    pub url: Value,
}

/// Why a track request was rejected before any fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid URL provided")]
    MissingUrl,

    #[error("Invalid URL format")]
    MalformedUrl,
}

/// A validated request to extract a location from one profile page.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Platform tag exactly as submitted (echoed back in the result)
    pub platform_tag: Value,
    /// Recognized platform; `None` skips extraction
    pub platform: Option<Platform>,
    /// URL exactly as submitted
    pub url: String,
}

impl ExtractionRequest {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_from(TrackLocationInput {
            platform: Value::String(platform.into()),
            url: Value::String(url.into()),
        })
    }
}

impl TryFrom<TrackLocationInput> for ExtractionRequest {
    type Error = ValidationError;

    fn try_from(input: TrackLocationInput) -> Result<Self, Self::Error> {
        let url = match input.url {
            Value::String(url) if !url.is_empty() => url,
            _ => return Err(ValidationError::MissingUrl),
        };
        Url::parse(&url).map_err(|_| ValidationError::MalformedUrl)?;

        let platform = input.platform.as_str().and_then(Platform::from_tag);

        Ok(Self {
            platform_tag: input.platform,
            platform,
            url,
        })
    }
}

/// Outcome of one extraction. `success` is true exactly when a location
/// was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub platform: Value,
    pub url: String,
    pub location: Option<String>,
    pub success: bool,
}

impl ExtractionResult {
    pub fn new(request: &ExtractionRequest, location: Option<String>) -> Self {
        Self {
            platform: request.platform_tag.clone(),
            url: request.url.clone(),
            success: location.is_some(),
            location,
        }
    }
}
