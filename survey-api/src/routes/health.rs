//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Health check endpoint (verifies datastore connectivity)
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let datastore_ok = state.surveys.health().await;

    let status = if datastore_ok { "healthy" } else { "degraded" };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: state.version.clone(),
    }))
}
