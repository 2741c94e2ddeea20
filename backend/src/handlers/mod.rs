//! HTTP handlers for the Airport API Service

use serde::Deserialize;
use utoipa::IntoParams;

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod health;
pub mod manufacturer;
pub mod order;
pub mod route;
pub mod user;

pub use airplane::*;
pub use airplane_type::*;
pub use airport::*;
pub use crew::*;
pub use flight::*;
pub use health::*;
pub use manufacturer::*;
pub use order::*;
pub use route::*;
pub use user::*;

/// Page query parameters shared by paginated endpoints
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number
    pub page: Option<u32>,
    /// Items per page, capped at 100
    pub per_page: Option<u32>,
}
