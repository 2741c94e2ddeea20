//! Route definitions for the Airport API Service

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // User account routes (register/token public, profile protected)
        .nest("/user", user_routes())
        // Protected routes - reference data
        .nest("/airports", airport_routes())
        .nest("/routes", route_routes())
        .nest("/airplane-manufacturers", manufacturer_routes())
        .nest("/airplane-types", airplane_type_routes())
        .nest("/airplanes", airplane_routes())
        // Protected routes - crew (staff only, reads included)
        .nest("/crew-positions", crew_position_routes())
        .nest("/crews", crew_routes())
        // Protected routes - flights and bookings
        .nest("/flights", flight_routes())
        .nest("/orders", order_routes())
}

/// User account routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/token", post(handlers::obtain_token))
        .route("/token/refresh", post(handlers::refresh_token))
        .merge(
            Router::new()
                .route("/me", get(handlers::me))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}

/// Airport catalog routes (protected)
fn airport_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_airports).post(handlers::create_airport),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Route management routes (protected)
fn route_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_routes).post(handlers::create_route))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Manufacturer routes (protected)
fn manufacturer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_manufacturers).post(handlers::create_manufacturer),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Airplane type routes (protected)
fn airplane_type_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_airplane_types).post(handlers::create_airplane_type),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Airplane routes (protected)
fn airplane_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_airplanes).post(handlers::create_airplane),
        )
        .route("/:airplane_id", get(handlers::get_airplane))
        .route(
            "/:airplane_id/upload-image",
            post(handlers::upload_airplane_image),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Crew position routes (protected)
fn crew_position_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_crew_positions).post(handlers::create_crew_position),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Crew routes (protected)
fn crew_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crew).post(handlers::create_crew))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Flight routes (protected)
fn flight_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_flights).post(handlers::create_flight),
        )
        .route("/:flight_id", get(handlers::get_flight))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Order routes (protected)
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders).post(handlers::create_order))
        .route(
            "/:order_id",
            get(handlers::get_order).delete(handlers::delete_order),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}
