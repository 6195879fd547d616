//! Application state for the API server

use std::sync::Arc;

use survey_db::{SurveyDatastore, SurveyDbError, SurveyService};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Survey service
    pub surveys: Arc<SurveyService>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create new app state from a connected datastore
    pub async fn new(datastore: Arc<SurveyDatastore>) -> Result<Self, SurveyDbError> {
        let surveys = Arc::new(SurveyService::new(datastore));

        // Apply the schema before serving requests
        surveys.init_schema().await?;

        Ok(Self {
            surveys,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
        }
    }
}
