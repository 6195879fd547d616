//! Survey Database Layer
//!
//! Persists survey submissions as schema-less documents in SurrealDB and
//! answers the count queries behind the statistics endpoint.
//!
//! The datastore connection is a process-wide lazily-initialized singleton:
//! concurrent first callers share one connect attempt instead of racing
//! independent connections (see [`SharedDatastore`]).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use survey_db::{DbConfig, SurveyDatastore, SurveyService};
//!
//! async fn example() {
//!     let datastore = Arc::new(SurveyDatastore::connect(&DbConfig::in_memory()).await.unwrap());
//!     let service = SurveyService::new(datastore);
//!     service.init_schema().await.unwrap();
//! }
//! ```

pub mod datastore;
pub mod entities;
pub mod error;
pub mod repo;
pub mod schema;
pub mod service;

pub use datastore::{DbConfig, SharedDatastore, SurveyDatastore, DATASTORE};
pub use entities::SurveyDocument;
pub use error::{SurveyDbError, SurveyDbResult};
pub use repo::SurveyRepo;
pub use schema::SURVEY_SCHEMA;
pub use service::{SurveyService, SurveyStatistics};
