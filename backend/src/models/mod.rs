//! Domain models for the Airport API Service
//!
//! Re-exports the shared domain rules used by the service layer

pub use shared::models::*;
