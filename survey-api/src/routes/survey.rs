//! Survey submission and statistics endpoints

use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    Json,
};
use serde_json::Value;
use survey_core::{RelationshipStatus, SurveyResponse};

use crate::dto::{SubmitSurveyRequest, SubmitSurveyResponse, SurveyStatsResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Submit one survey response
///
/// Validates the status field, normalizes the rest of the body into the
/// known answer shape, stamps the server metadata and appends one document.
pub async fn submit_survey(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<SubmitSurveyResponse>)> {
    let response = normalize_submission(body)?;
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let id = state
        .surveys
        .record_submission(response, user_agent)
        .await
        .map_err(ApiError::SaveFailed)?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitSurveyResponse {
            success: true,
            message: "Survey submitted successfully".to_string(),
            id,
        }),
    ))
}

/// Aggregate response counts
pub async fn survey_statistics(
    State(state): State<AppState>,
) -> ApiResult<Json<SurveyStatsResponse>> {
    let stats = state
        .surveys
        .statistics()
        .await
        .map_err(ApiError::StatsFailed)?;

    Ok(Json(SurveyStatsResponse {
        total: stats.total,
        single: stats.single,
        married: stats.married,
    }))
}

// Helper functions

/// Normalize an arbitrary JSON body into a validated submission
///
/// The status field must be one of the two allowed values; every other
/// known field is kept as sent and unknown fields are dropped before the
/// document reaches the persistence layer.
fn normalize_submission(body: Value) -> ApiResult<SurveyResponse> {
    let request: SubmitSurveyRequest =
        serde_json::from_value(body).map_err(|_| ApiError::MalformedPayload)?;

    let status = RelationshipStatus::parse(request.status.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::InvalidStatus)?;

    Ok(SurveyResponse {
        status,
        answers: request.answers,
    })
}
