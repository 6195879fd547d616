//! SurrealDB schema definition for the survey collection

/// Survey schema
///
/// The table is deliberately schema-less: a stored document is whatever the
/// normalized submission contained, plus the server-stamped metadata fields.
/// Only the status field (counted by the statistics endpoint) and the
/// generated identifier are indexed.
pub const SURVEY_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS surveys SCHEMALESS;
DEFINE INDEX IF NOT EXISTS idx_survey_id ON surveys FIELDS surveyId UNIQUE;
DEFINE INDEX IF NOT EXISTS idx_survey_status ON surveys FIELDS status;
"#;
