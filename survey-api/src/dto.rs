//! Data Transfer Objects for API requests and responses

use serde::{Deserialize, Serialize};
use survey_core::SurveyAnswers;

// ============ Submission DTOs ============

/// Submit survey request
///
/// The body is accepted loosely, matching what the browser form sends:
/// `status` plus the answer fields at the top level. Unknown fields are
/// dropped during normalization; only `status` is validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitSurveyRequest {
    /// Relationship status ("single" or "married")
    pub status: Option<String>,
    /// Known answer fields, flattened alongside `status`
    #[serde(flatten)]
    pub answers: SurveyAnswers,
}

/// Submit survey response
#[derive(Debug, Serialize)]
pub struct SubmitSurveyResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

// ============ Statistics DTOs ============

/// Survey statistics response
#[derive(Debug, Serialize)]
pub struct SurveyStatsResponse {
    pub total: u64,
    pub single: u64,
    pub married: u64,
}

// ============ Health DTOs ============

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
