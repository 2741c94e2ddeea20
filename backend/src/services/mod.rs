//! Business logic services for the Airport API Service

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod auth;
pub mod crew;
pub mod flight;
pub mod manufacturer;
pub mod order;
pub mod route;

pub use airplane::AirplaneService;
pub use airplane_type::AirplaneTypeService;
pub use airport::AirportService;
pub use auth::AuthService;
pub use crew::CrewService;
pub use flight::FlightService;
pub use manufacturer::ManufacturerService;
pub use order::OrderService;
pub use route::RouteService;
