//! Domain models for the Airport API Service

mod airplane;
mod airport;
mod crew;
mod flight;

pub use airplane::*;
pub use airport::*;
pub use crew::*;
pub use flight::*;
