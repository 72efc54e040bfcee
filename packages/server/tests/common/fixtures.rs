//! Test fixtures: profile pages served by the fake upstream.

use std::time::Duration;

use axum::{http::StatusCode, response::Html, routing::get, Router};

pub const INSTAGRAM_PIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Jane Doe (@jane) • Instagram photos and videos</title>
    <meta property="og:description" content="1,024 Followers, 300 Following - Street photographer 📍 Paris, France">
</head>
<body><main><h2>jane</h2></main></body>
</html>"#;

pub const INSTAGRAM_STRUCTURED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta property="og:description" content="Coffee, code and cats">
    <script type="application/ld+json">{ broken</script>
    <script type="application/ld+json">{"@type":"ProfilePage","location":{"name":"Tokyo"}}</script>
</head>
<body><main><h2>ken</h2></main></body>
</html>"#;

pub const FACEBOOK_LIVES_IN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Max | Facebook</title></head>
<body>
    <div class="contact-wrapper">
        <div class="contact-item">Works at Example GmbH</div>
        <div class="contact-item">Lives in Berlin</div>
    </div>
</body>
</html>"#;

pub const FACEBOOK_EMPTY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Someone | Facebook</title></head>
<body>
    <div class="contact-wrapper">
        <div class="contact-item">Works at Example GmbH</div>
    </div>
    <p>Nothing to see here</p>
</body>
</html>"#;

/// Fake third-party site.
///
/// `/slow` answers after `slow_delay`, which tests set above the ingestor
/// timeout.
pub fn upstream_router(slow_delay: Duration) -> Router {
    Router::new()
        .route("/instagram/jane", get(|| async { Html(INSTAGRAM_PIN_PAGE) }))
        .route("/instagram/ken", get(|| async { Html(INSTAGRAM_STRUCTURED_PAGE) }))
        .route("/facebook/max", get(|| async { Html(FACEBOOK_LIVES_IN_PAGE) }))
        .route("/facebook/someone", get(|| async { Html(FACEBOOK_EMPTY_PAGE) }))
        .route(
            "/private",
            get(|| async { (StatusCode::FORBIDDEN, Html("<h1>Login required</h1>")) }),
        )
        .route(
            "/slow",
            get(move || async move {
                tokio::time::sleep(slow_delay).await;
                Html(INSTAGRAM_PIN_PAGE)
            }),
        )
}
