// Handler-facing error type

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::models::ErrorResponse;
use crate::upstream::UpstreamError;

/// Every variant surfaces as a 500; callers can't tell a bad query from an outage
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error fetching podcasts: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Error parsing query string: {0}")]
    Query(#[from] QueryRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        error!(status = %status, "{}", self);

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
