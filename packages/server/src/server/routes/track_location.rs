use axum::{extract::rejection::JsonRejection, extract::Extension, Json};

use crate::domains::social_profile::{
    track_location, ExtractionRequest, ExtractionResult, TrackLocationInput,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Fetch-and-extract endpoint.
///
/// - 400 for an unreadable body or a missing/malformed `url`
/// - 500 with a generic message when the profile page cannot be fetched
/// - 200 otherwise, whether or not a location was found
pub async fn track_location_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<TrackLocationInput>, JsonRejection>,
) -> Result<Json<ExtractionResult>, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected track-location body");
        ApiError::InvalidBody
    })?;

    let request = ExtractionRequest::try_from(input)?;

    let result = track_location(&request, &state.deps).await.map_err(|e| {
        tracing::warn!(url = %request.url, error = %e, "Track location failed");
        ApiError::from(e)
    })?;

    Ok(Json(result))
}
