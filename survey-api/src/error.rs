//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use survey_db::SurveyDbError;
use thiserror::Error;

/// API error types
///
/// Exactly two kinds reach the client: input errors as 400 and
/// infrastructure errors as 500, each with a static message. The datastore
/// detail is logged server-side and never exposed.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid relationship status")]
    InvalidStatus,

    #[error("Malformed survey payload")]
    MalformedPayload,

    #[error("Failed to save survey response")]
    SaveFailed(#[source] SurveyDbError),

    #[error("Failed to fetch survey statistics")]
    StatsFailed(#[source] SurveyDbError),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidStatus | ApiError::MalformedPayload => StatusCode::BAD_REQUEST,
            ApiError::SaveFailed(_) | ApiError::StatsFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if let ApiError::SaveFailed(e) | ApiError::StatsFailed(e) = &self {
            tracing::error!(error = %e, "Survey persistence failure");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
