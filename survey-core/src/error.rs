//! Error types for survey core

use thiserror::Error;

/// Survey domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    #[error("Invalid relationship status")]
    InvalidStatus,
}

/// Result type alias for survey domain operations
pub type SurveyResult<T> = Result<T, SurveyError>;
