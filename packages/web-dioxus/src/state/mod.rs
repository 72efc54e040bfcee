//! Form state and submission logic

use std::future::Future;

use futures::future::join_all;

use crate::types::{LocationResult, ProfilePlatform};

/// The two URL fields of the tracking form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackForm {
    pub instagram_url: String,
    pub facebook_url: String,
}

impl TrackForm {
    pub fn new(instagram_url: impl Into<String>, facebook_url: impl Into<String>) -> Self {
        Self {
            instagram_url: instagram_url.into(),
            facebook_url: facebook_url.into(),
        }
    }

    /// Non-empty fields, Instagram first.
    pub fn targets(&self) -> Vec<(ProfilePlatform, String)> {
        [
            (ProfilePlatform::Instagram, &self.instagram_url),
            (ProfilePlatform::Facebook, &self.facebook_url),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(platform, url)| (platform, url.trim().to_string()))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.targets().is_empty()
    }
}

/// The form to send, or `None` while a submission is in flight or when
/// both fields are empty.
pub fn begin_submission(in_flight: bool, form: TrackForm) -> Option<TrackForm> {
    if in_flight || form.is_empty() {
        None
    } else {
        Some(form)
    }
}

/// Run one request per filled field concurrently.
///
/// Returns `None` without calling `track` when both fields are empty.
/// Results keep form order regardless of completion order.
pub async fn submit_all<F, Fut>(form: &TrackForm, track: F) -> Option<Vec<LocationResult>>
where
    F: Fn(ProfilePlatform, String) -> Fut,
    Fut: Future<Output = LocationResult>,
{
    let targets = form.targets();
    if targets.is_empty() {
        return None;
    }

    let requests = targets.into_iter().map(|(platform, url)| track(platform, url));
    Some(join_all(requests).await)
}
