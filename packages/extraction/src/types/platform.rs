//! Supported social networks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Social network whose heuristic chain should run against a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
}

impl Platform {
    /// Wire tag (`"instagram"`, `"facebook"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
        }
    }

    /// Parse a wire tag, returning `None` for anything unsupported.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instagram" => Ok(Platform::Instagram),
            "facebook" => Ok(Platform::Facebook),
            other => Err(ExtractionError::UnknownPlatform {
                tag: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("instagram".parse::<Platform>().unwrap(), Platform::Instagram);
        assert_eq!("facebook".parse::<Platform>().unwrap(), Platform::Facebook);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(Platform::from_tag("Instagram"), None);
        assert_eq!(Platform::from_tag("twitter"), None);
        assert!(matches!(
            "myspace".parse::<Platform>(),
            Err(ExtractionError::UnknownPlatform { tag }) if tag == "myspace"
        ));
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&Platform::Facebook).unwrap();
        assert_eq!(json, "\"facebook\"");
    }
}
