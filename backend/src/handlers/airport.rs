//! Airport catalog HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorResponse;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::airport::{Airport, AirportService, CreateAirportInput};
use crate::AppState;

/// List response wrapper
#[derive(Serialize, ToSchema)]
pub struct AirportList {
    pub airports: Vec<Airport>,
}

/// List all airports
#[utoipa::path(
    get,
    path = "/api/v1/airports",
    tag = "airports",
    responses(
        (status = 200, description = "All airports ordered by name", body = AirportList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_airports(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> impl IntoResponse {
    let service = AirportService::new(state.db.clone());

    match service.list_airports().await {
        Ok(airports) => (StatusCode::OK, Json(AirportList { airports })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new airport (staff only)
#[utoipa::path(
    post,
    path = "/api/v1/airports",
    tag = "airports",
    request_body = CreateAirportInput,
    responses(
        (status = 201, description = "Airport created", body = Airport),
        (status = 403, description = "Requires staff rights", body = ErrorResponse),
        (status = 409, description = "Airport name already exists", body = ErrorResponse)
    )
)]
pub async fn create_airport(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateAirportInput>,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = AirportService::new(state.db.clone());

    match service.create_airport(input).await {
        Ok(airport) => (StatusCode::CREATED, Json(airport)).into_response(),
        Err(e) => e.into_response(),
    }
}
