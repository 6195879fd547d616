//! Survey database error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyDbError {
    #[error("Datastore error: {0}")]
    Datastore(#[from] surrealdb::Error),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type SurveyDbResult<T> = Result<T, SurveyDbError>;
