//! Survey API Server
//!
//! REST surface for the relationship survey.
//!
//! ## Endpoints
//!
//! - POST /api/survey - Submit one survey response
//! - GET /api/survey - Aggregate response counts
//! - GET /health - Health check

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use routes::*;
pub use server::*;
pub use state::*;
