//! Shared types and domain rules for the Airport API Service
//!
//! This crate contains the pure parts of the domain used by the backend's
//! service layer and its tests: seating geometry, flight scheduling rules,
//! pagination types and input validation helpers.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
