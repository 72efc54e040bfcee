use extraction::{extract_location, CrawlError};

use crate::domains::social_profile::models::{ExtractionRequest, ExtractionResult};
use crate::kernel::ServerDeps;

/// Fetch a profile page and run the platform's location heuristics on it.
///
/// A page without a recognizable location is a successful result with
/// `location: None`; only fetch failures are errors.
pub async fn track_location(
    request: &ExtractionRequest,
    deps: &ServerDeps,
) -> Result<ExtractionResult, CrawlError> {
    tracing::info!(
        url = %request.url,
        platform = ?request.platform,
        ingestor = deps.ingestor.name(),
        "Tracking profile location"
    );

    let page = deps.ingestor.fetch(&request.url).await?;

    let location = extract_location(request.platform, &page.html);

    match &location {
        Some(location) => tracing::info!(url = %request.url, location = %location, "Location found"),
        None => tracing::info!(url = %request.url, "No location found"),
    }

    Ok(ExtractionResult::new(request, location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::TestDependencies;
    use extraction::MockIngestor;

    const IG_URL: &str = "https://www.instagram.com/jane/";

    #[tokio::test]
    async fn test_found_location() {
        let mock = MockIngestor::new().with_html(
            IG_URL,
            r#"<meta property="og:description" content="📍 Paris, France">"#,
        );
        let deps = TestDependencies::new().mock_ingestor(mock.clone()).into_server_deps();

        let request = ExtractionRequest::new("instagram", IG_URL).unwrap();
        let result = track_location(&request, &deps).await.unwrap();

        assert_eq!(result.location.as_deref(), Some("Paris, France"));
        assert!(result.success);
        assert_eq!(mock.fetch_calls(), vec![IG_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_platform_still_fetches_but_skips_extraction() {
        let mock = MockIngestor::new().with_html(
            IG_URL,
            r#"<meta property="og:description" content="📍 Paris, France">"#,
        );
        let deps = TestDependencies::new().mock_ingestor(mock.clone()).into_server_deps();

        let request = ExtractionRequest::new("tiktok", IG_URL).unwrap();
        let result = track_location(&request, &deps).await.unwrap();

        assert_eq!(result.location, None);
        assert!(!result.success);
        assert_eq!(mock.fetch_call_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_error() {
        let mock = MockIngestor::new().with_status(IG_URL, 404);
        let deps = TestDependencies::new().mock_ingestor(mock).into_server_deps();

        let request = ExtractionRequest::new("instagram", IG_URL).unwrap();
        let err = track_location(&request, &deps).await.unwrap_err();

        assert!(matches!(err, CrawlError::Status { status: 404, .. }));
    }
}
