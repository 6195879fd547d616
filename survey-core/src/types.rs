//! Survey domain types
//!
//! Wire and storage formats use camelCase field names; the answer payload is
//! the same shape the browser form accumulates before submitting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SurveyError;

/// Relationship status chosen on step 1
///
/// This is the only validated field of a submission: every other answer is
/// free-form and stored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStatus {
    Single,
    Married,
}

impl RelationshipStatus {
    /// Get the string representation used on the wire and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
        }
    }

    /// Parse from the wire representation
    pub fn parse(s: &str) -> Result<Self, SurveyError> {
        match s {
            "single" => Ok(Self::Single),
            "married" => Ok(Self::Married),
            _ => Err(SurveyError::InvalidStatus),
        }
    }
}

impl fmt::Display for RelationshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Answer fields collected across the form steps
///
/// Both tracks are present; the track not taken keeps its defaults. Unknown
/// client-supplied fields are dropped when a submission is normalized into
/// this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyAnswers {
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
}

/// A validated survey submission: status plus answers
///
/// Created once at submission time; never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub status: RelationshipStatus,
    #[serde(flatten)]
    pub answers: SurveyAnswers,
}
