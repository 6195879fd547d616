//! Integration tests for the survey API endpoints
//!
//! These tests run the real router against an in-memory datastore and
//! exercise the submission and statistics flows end to end.

use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use survey_api::{create_router, AppState};
use survey_db::{DbConfig, SurveyDatastore};

/// Create test app state with an in-memory database
async fn create_test_state() -> AppState {
    let config = DbConfig::in_memory();
    let datastore = Arc::new(SurveyDatastore::connect(&config).await.unwrap());
    AppState::new(datastore).await.unwrap()
}

/// Create test server
async fn create_test_server() -> TestServer {
    let state = create_test_state().await;
    let router = create_router(state);
    TestServer::new(router).unwrap()
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

// ============ Submission Endpoint Tests ============

#[tokio::test]
async fn test_submit_single_survey() {
    let server = create_test_server().await;

    let request = json!({
        "status": "single",
        "singleChallenges": ["Loneliness", "Trust issues"],
        "singleDesires": "A partner who actually listens",
        "singleFears": "Opening up again",
        "singleTopics": ["Communication skills"]
    });

    let response = server.post("/api/survey").json(&request).await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Survey submitted successfully");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_submit_married_survey() {
    let server = create_test_server().await;

    let request = json!({
        "status": "married",
        "marriedChallenges": ["Communication issues", "Intimacy concerns"],
        "marriedYears": "6-10 years",
        "marriedStrengths": "We still make each other laugh",
        "marriedTopics": ["Rekindling romance"],
        "additionalThoughts": "How do we keep things fresh?"
    });

    let response = server.post("/api/survey").json(&request).await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn test_submit_invalid_status() {
    let server = create_test_server().await;

    let request = json!({
        "status": "divorced",
        "singleDesires": "anything"
    });

    let response = server.post("/api/survey").json(&request).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid relationship status");
}

#[tokio::test]
async fn test_submit_missing_status() {
    let server = create_test_server().await;

    let request = json!({
        "singleChallenges": ["Loneliness"]
    });

    let response = server.post("/api/survey").json(&request).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid relationship status");
}

#[tokio::test]
async fn test_submit_case_sensitive_status() {
    let server = create_test_server().await;

    let request = json!({"status": "Single"});

    let response = server.post("/api/survey").json(&request).await;

    response.assert_status_bad_request();
}

// ============ Statistics Endpoint Tests ============

#[tokio::test]
async fn test_statistics_empty() {
    let server = create_test_server().await;

    let response = server.get("/api/survey").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 0);
    assert_eq!(body["single"], 0);
    assert_eq!(body["married"], 0);
}

#[tokio::test]
async fn test_statistics_count_by_status() {
    let server = create_test_server().await;

    for _ in 0..2 {
        let response = server
            .post("/api/survey")
            .json(&json!({"status": "single"}))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
    }
    for _ in 0..3 {
        let response = server
            .post("/api/survey")
            .json(&json!({"status": "married"}))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server.get("/api/survey").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 5);
    assert_eq!(body["single"], 2);
    assert_eq!(body["married"], 3);
}

#[tokio::test]
async fn test_statistics_ignore_rejected_submissions() {
    let server = create_test_server().await;

    let response = server
        .post("/api/survey")
        .json(&json!({"status": "single"}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/survey")
        .json(&json!({"status": "widowed"}))
        .await;
    response.assert_status_bad_request();

    let response = server.get("/api/survey").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 1);
}

// ============ End-to-End Flow Tests ============

/// Test complete flow: Submit -> inspect the stored document
#[tokio::test]
async fn test_e2e_submission_is_stored_with_metadata() {
    let state = create_test_state().await;
    let router = create_router(state.clone());
    let server = TestServer::new(router).unwrap();

    let request = json!({
        "status": "married",
        "marriedChallenges": ["Financial disagreements"],
        "marriedYears": "20+ years",
        "marriedStrengths": "Mutual respect",
        "marriedTopics": ["Managing finances together"],
        "additionalThoughts": "",
        "ignoredExtraField": "dropped"
    });

    let response = server
        .post("/api/survey")
        .add_header(
            axum::http::header::USER_AGENT,
            axum::http::HeaderValue::from_static("survey-test/1.0"),
        )
        .json(&request)
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    let id = body["id"].as_str().unwrap();

    let stored = state.surveys.submission(id).await.unwrap().unwrap();
    assert_eq!(stored.status.as_str(), "married");
    assert_eq!(stored.married_challenges, vec!["Financial disagreements"]);
    assert_eq!(stored.married_years, "20+ years");
    assert_eq!(stored.user_agent, "survey-test/1.0");
    // Timestamp is stamped server-side at submission time
    assert!(stored.submitted_at <= chrono::Utc::now());
}

/// Requests without a User-Agent header fall back to the sentinel value
#[tokio::test]
async fn test_e2e_missing_user_agent_falls_back_to_unknown() {
    let state = create_test_state().await;
    let router = create_router(state.clone());
    let server = TestServer::new(router).unwrap();

    let response = server
        .post("/api/survey")
        .json(&json!({"status": "single"}))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    let id = body["id"].as_str().unwrap();

    let stored = state.surveys.submission(id).await.unwrap().unwrap();
    assert_eq!(stored.user_agent, "unknown");
}
