//! Survey Core
//!
//! This crate provides the domain types for the relationship survey:
//! - The relationship status enum (the one validated field)
//! - The answer payload exchanged between client, server and storage
//! - The multi-step form flow controller with its per-step gating rules
//! - The option catalogs the form presents for each status track

pub mod constants;
pub mod error;
pub mod form;
pub mod types;

pub use constants::*;
pub use error::*;
pub use form::FormState;
pub use types::*;
