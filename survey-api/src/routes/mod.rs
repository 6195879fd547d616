//! API route handlers

pub mod health;
pub mod survey;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health::health_check))
        // Survey endpoints: submission and statistics share the route
        .route(
            "/api/survey",
            post(survey::submit_survey).get(survey::survey_statistics),
        )
        .with_state(state)
}
