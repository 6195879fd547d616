//! Survey document entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use survey_core::{RelationshipStatus, SurveyAnswers, SurveyResponse};
use uuid::Uuid;

/// One survey submission as stored in the `surveys` table
///
/// The document is the normalized submission laid out flat, plus the
/// server-stamped metadata: a generated identifier, the submission time and
/// the client user-agent string captured at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDocument {
    /// Generated unique identifier, returned to the submitter
    pub survey_id: String,
    /// Relationship status, the counted field
    pub status: RelationshipStatus,
    // Single track
    pub single_challenges: Vec<String>,
    pub single_desires: String,
    pub single_fears: String,
    pub single_topics: Vec<String>,
    // Married track
    pub married_challenges: Vec<String>,
    pub married_years: String,
    pub married_strengths: String,
    pub married_topics: Vec<String>,
    // Common
    pub additional_thoughts: String,
    /// Server-side submission timestamp
    pub submitted_at: DateTime<Utc>,
    /// Client user-agent, `"unknown"` when the header was absent
    pub user_agent: String,
}

impl SurveyDocument {
    pub const TABLE: &'static str = "surveys";

    /// Sentinel stored when the client sent no user-agent header
    pub const UNKNOWN_USER_AGENT: &'static str = "unknown";

    /// Build a document from a validated submission, stamping the metadata
    pub fn new(response: SurveyResponse, user_agent: Option<String>) -> Self {
        let SurveyAnswers {
            single_challenges,
            single_desires,
            single_fears,
            single_topics,
            married_challenges,
            married_years,
            married_strengths,
            married_topics,
            additional_thoughts,
        } = response.answers;

        Self {
            survey_id: Uuid::new_v4().to_string(),
            status: response.status,
            single_challenges,
            single_desires,
            single_fears,
            single_topics,
            married_challenges,
            married_years,
            married_strengths,
            married_topics,
            additional_thoughts,
            submitted_at: Utc::now(),
            user_agent: user_agent.unwrap_or_else(|| Self::UNKNOWN_USER_AGENT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn married_response() -> SurveyResponse {
        SurveyResponse {
            status: RelationshipStatus::Married,
            answers: SurveyAnswers {
                married_challenges: vec!["Communication issues".to_string()],
                married_years: "1-5 years".to_string(),
                married_strengths: "We laugh a lot".to_string(),
                married_topics: vec!["Conflict resolution".to_string()],
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_new_stamps_metadata() {
        let doc = SurveyDocument::new(married_response(), Some("test-agent".to_string()));

        assert!(!doc.survey_id.is_empty());
        assert_eq!(doc.status, RelationshipStatus::Married);
        assert_eq!(doc.user_agent, "test-agent");
        assert_eq!(doc.married_years, "1-5 years");
    }

    #[test]
    fn test_absent_user_agent_falls_back_to_sentinel() {
        let doc = SurveyDocument::new(married_response(), None);
        assert_eq!(doc.user_agent, SurveyDocument::UNKNOWN_USER_AGENT);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = SurveyDocument::new(married_response(), None);
        let b = SurveyDocument::new(married_response(), None);
        assert_ne!(a.survey_id, b.survey_id);
    }

    #[test]
    fn test_stored_shape_is_camel_case() {
        let doc = SurveyDocument::new(married_response(), None);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["status"], "married");
        assert_eq!(value["marriedChallenges"][0], "Communication issues");
        assert!(value.get("submittedAt").is_some());
        assert_eq!(value["userAgent"], "unknown");
    }
}
