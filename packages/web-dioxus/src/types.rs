//! Type definitions for the track-location API and UI results

use serde::{Deserialize, Serialize};

/// Form slot / platform tag sent to the API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfilePlatform {
    Instagram,
    Facebook,
}

impl ProfilePlatform {
    pub fn tag(&self) -> &'static str {
        match self {
            ProfilePlatform::Instagram => "instagram",
            ProfilePlatform::Facebook => "facebook",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfilePlatform::Instagram => "Instagram",
            ProfilePlatform::Facebook => "Facebook",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ProfilePlatform::Instagram => "https://instagram.com/username",
            ProfilePlatform::Facebook => "https://facebook.com/username",
        }
    }
}

/// `POST /api/track-location` body
#[derive(Debug, Clone, Serialize)]
pub struct TrackLocationRequest {
    pub platform: ProfilePlatform,
    pub url: String,
}

/// Any response from the endpoint: success bodies carry `location`,
/// 400/500 bodies carry `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackLocationResponse {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One rendered result row
#[derive(Debug, Clone, PartialEq)]
pub struct LocationResult {
    pub platform: ProfilePlatform,
    pub url: String,
    pub location: Option<String>,
    pub error: Option<String>,
}

/// What a result card shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultStatus {
    Found(String),
    NotFound,
    Failed(String),
}

impl LocationResult {
    pub fn from_response(
        platform: ProfilePlatform,
        url: String,
        response: TrackLocationResponse,
    ) -> Self {
        Self {
            platform,
            url,
            location: response.location.filter(|l| !l.is_empty()),
            error: response.error.filter(|e| !e.is_empty()),
        }
    }

    pub fn network_error(platform: ProfilePlatform, url: String) -> Self {
        Self {
            platform,
            url,
            location: None,
            error: Some("Network error".to_string()),
        }
    }

    /// Errors win over locations.
    pub fn status(&self) -> ResultStatus {
        match (&self.error, &self.location) {
            (Some(error), _) => ResultStatus::Failed(error.clone()),
            (None, Some(location)) => ResultStatus::Found(location.clone()),
            (None, None) => ResultStatus::NotFound,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_platform_tag() {
        let body = serde_json::to_value(TrackLocationRequest {
            platform: ProfilePlatform::Facebook,
            url: "https://facebook.com/max".to_string(),
        })
        .unwrap();
        assert_eq!(body["platform"], "facebook");
    }

    #[test]
    fn test_error_response_decodes() {
        let response: TrackLocationResponse =
            serde_json::from_str(r#"{"error":"Invalid URL format"}"#).unwrap();
        let result =
            LocationResult::from_response(ProfilePlatform::Instagram, "x".to_string(), response);
        assert_eq!(result.status(), ResultStatus::Failed("Invalid URL format".to_string()));
    }

    #[test]
    fn test_status_variants() {
        let found: TrackLocationResponse =
            serde_json::from_str(r#"{"platform":"instagram","url":"u","location":"Paris","success":true}"#)
                .unwrap();
        let found = LocationResult::from_response(ProfilePlatform::Instagram, "u".into(), found);
        assert_eq!(found.status(), ResultStatus::Found("Paris".to_string()));

        let missed: TrackLocationResponse =
            serde_json::from_str(r#"{"location":null,"success":false}"#).unwrap();
        let missed = LocationResult::from_response(ProfilePlatform::Facebook, "u".into(), missed);
        assert_eq!(missed.status(), ResultStatus::NotFound);
        assert!(!missed.is_error());
    }
}
