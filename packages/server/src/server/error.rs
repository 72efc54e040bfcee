//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use extraction::CrawlError;
use serde::Serialize;
use thiserror::Error;

use crate::domains::social_profile::ValidationError;

/// Message returned for every upstream failure. The actual cause is logged,
/// never sent to the caller.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch profile data. The profile may be private, URL invalid, or temporarily unavailable.";

/// Errors surfaced by the HTTP API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", FETCH_FAILED_MESSAGE)]
    FetchFailed(#[source] CrawlError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CrawlError> for ApiError {
    fn from(error: CrawlError) -> Self {
        ApiError::FetchFailed(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
