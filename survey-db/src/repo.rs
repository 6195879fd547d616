//! Survey repository implementation

use std::sync::Arc;

use serde::Deserialize;
use survey_core::RelationshipStatus;

use crate::datastore::SurveyDatastore;
use crate::entities::SurveyDocument;
use crate::error::{SurveyDbError, SurveyDbResult};
use crate::schema::SURVEY_SCHEMA;

/// Survey document repository
pub struct SurveyRepo {
    datastore: Arc<SurveyDatastore>,
}

#[derive(Deserialize)]
struct CountRow {
    total: u64,
}

impl SurveyRepo {
    pub fn new(datastore: Arc<SurveyDatastore>) -> Self {
        Self { datastore }
    }

    /// Apply the survey schema (idempotent)
    pub async fn init_schema(&self) -> SurveyDbResult<()> {
        self.datastore
            .client()
            .query(SURVEY_SCHEMA)
            .await
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        Ok(())
    }

    /// Insert one survey document
    pub async fn insert(&self, document: &SurveyDocument) -> SurveyDbResult<SurveyDocument> {
        let query = format!("CREATE {} CONTENT $data RETURN AFTER", SurveyDocument::TABLE);
        let document_clone = document.clone();

        let mut response = self
            .datastore
            .client()
            .query(&query)
            .bind(("data", document_clone))
            .await
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        let result: Option<SurveyDocument> = response
            .take(0)
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        result.ok_or_else(|| SurveyDbError::Query("Failed to create survey document".to_string()))
    }

    /// Get a survey document by its generated identifier
    pub async fn get_by_id(&self, survey_id: &str) -> SurveyDbResult<Option<SurveyDocument>> {
        let query = format!(
            "SELECT * FROM {} WHERE surveyId = $survey_id LIMIT 1",
            SurveyDocument::TABLE
        );

        let survey_id_str = survey_id.to_string();

        let mut response = self
            .datastore
            .client()
            .query(&query)
            .bind(("survey_id", survey_id_str))
            .await
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        let result: Option<SurveyDocument> = response
            .take(0)
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        Ok(result)
    }

    /// Count all survey documents
    pub async fn count_all(&self) -> SurveyDbResult<u64> {
        let query = format!(
            "SELECT count() AS total FROM {} GROUP ALL",
            SurveyDocument::TABLE
        );

        let mut response = self
            .datastore
            .client()
            .query(&query)
            .await
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        let result: Option<CountRow> = response
            .take(0)
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        Ok(result.map(|r| r.total).unwrap_or(0))
    }

    /// Count survey documents with the given status
    pub async fn count_by_status(&self, status: RelationshipStatus) -> SurveyDbResult<u64> {
        let query = format!(
            "SELECT count() AS total FROM {} WHERE status = $status GROUP ALL",
            SurveyDocument::TABLE
        );

        let status_str = status.as_str().to_string();

        let mut response = self
            .datastore
            .client()
            .query(&query)
            .bind(("status", status_str))
            .await
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        let result: Option<CountRow> = response
            .take(0)
            .map_err(|e| SurveyDbError::Query(e.to_string()))?;

        Ok(result.map(|r| r.total).unwrap_or(0))
    }
}
