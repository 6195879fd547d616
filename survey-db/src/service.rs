//! Survey service
//!
//! The high-level operations behind the two API endpoints: record one
//! submission, and count submissions by status. Statistics are recomputed
//! on every call; there is no caching layer.

use std::sync::Arc;

use serde::Serialize;
use survey_core::{RelationshipStatus, SurveyResponse};
use tracing::info;

use crate::datastore::SurveyDatastore;
use crate::entities::SurveyDocument;
use crate::error::SurveyDbResult;
use crate::repo::SurveyRepo;

/// Aggregate counts over the survey collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurveyStatistics {
    pub total: u64,
    pub single: u64,
    pub married: u64,
}

/// High-level survey operations
pub struct SurveyService {
    datastore: Arc<SurveyDatastore>,
    repo: SurveyRepo,
}

impl SurveyService {
    pub fn new(datastore: Arc<SurveyDatastore>) -> Self {
        let repo = SurveyRepo::new(Arc::clone(&datastore));
        Self { datastore, repo }
    }

    /// Apply the survey schema (idempotent)
    pub async fn init_schema(&self) -> SurveyDbResult<()> {
        self.repo.init_schema().await
    }

    /// Record one validated submission; returns the generated identifier
    pub async fn record_submission(
        &self,
        response: SurveyResponse,
        user_agent: Option<String>,
    ) -> SurveyDbResult<String> {
        let document = SurveyDocument::new(response, user_agent);
        let created = self.repo.insert(&document).await?;

        info!(
            survey_id = %created.survey_id,
            status = %created.status,
            "Survey response stored"
        );

        Ok(created.survey_id)
    }

    /// Fetch a stored submission by its generated identifier
    pub async fn submission(&self, survey_id: &str) -> SurveyDbResult<Option<SurveyDocument>> {
        self.repo.get_by_id(survey_id).await
    }

    /// Compute the aggregate counts
    pub async fn statistics(&self) -> SurveyDbResult<SurveyStatistics> {
        let total = self.repo.count_all().await?;
        let single = self.repo.count_by_status(RelationshipStatus::Single).await?;
        let married = self
            .repo
            .count_by_status(RelationshipStatus::Married)
            .await?;

        Ok(SurveyStatistics {
            total,
            single,
            married,
        })
    }

    /// Whether the datastore responds
    pub async fn health(&self) -> bool {
        self.datastore.health().await
    }
}
