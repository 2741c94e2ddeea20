//! Flight HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use shared::types::{PaginatedResponse, Pagination};

use crate::error::ErrorResponse;
use crate::handlers::PageParams;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::flight::{
    CreateFlightInput, Flight, FlightDetail, FlightFilters, FlightListItem, FlightService,
    FLIGHTS_PER_PAGE,
};
use crate::AppState;

/// List flights with filters and pagination
#[utoipa::path(
    get,
    path = "/api/v1/flights",
    tag = "flights",
    params(FlightFilters, PageParams),
    responses(
        (status = 200, description = "Flights ordered by departure time", body = PaginatedResponse<FlightListItem>),
        (status = 400, description = "Invalid filter value", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_flights(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(filters): Query<FlightFilters>,
    Query(page): Query<PageParams>,
) -> impl IntoResponse {
    let pagination = Pagination::clamped(page.page, page.per_page, FLIGHTS_PER_PAGE);
    let service = FlightService::new(state.db.clone());

    match service.list_flights(filters, pagination).await {
        Ok(flights) => (StatusCode::OK, Json(flights)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific flight with crew and sold seats
#[utoipa::path(
    get,
    path = "/api/v1/flights/{flight_id}",
    tag = "flights",
    params(("flight_id" = Uuid, Path, description = "Flight id")),
    responses(
        (status = 200, description = "Flight detail", body = FlightDetail),
        (status = 404, description = "Unknown flight", body = ErrorResponse)
    )
)]
pub async fn get_flight(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(flight_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = FlightService::new(state.db.clone());

    match service.get_flight(flight_id).await {
        Ok(flight) => (StatusCode::OK, Json(flight)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Schedule a new flight (staff only)
#[utoipa::path(
    post,
    path = "/api/v1/flights",
    tag = "flights",
    request_body = CreateFlightInput,
    responses(
        (status = 201, description = "Flight scheduled", body = Flight),
        (status = 400, description = "Unknown route, airplane or crew", body = ErrorResponse),
        (status = 403, description = "Requires staff rights", body = ErrorResponse),
        (status = 422, description = "Arrival not later than departure", body = ErrorResponse)
    )
)]
pub async fn create_flight(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateFlightInput>,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = FlightService::new(state.db.clone());

    match service.create_flight(input).await {
        Ok(flight) => (StatusCode::CREATED, Json(flight)).into_response(),
        Err(e) => e.into_response(),
    }
}
