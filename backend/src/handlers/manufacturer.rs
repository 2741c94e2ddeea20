//! Airplane manufacturer HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorResponse;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::manufacturer::{
    AirplaneManufacturer, CreateManufacturerInput, ManufacturerService,
};
use crate::AppState;

/// List response wrapper
#[derive(Serialize, ToSchema)]
pub struct ManufacturerList {
    pub manufacturers: Vec<AirplaneManufacturer>,
}

/// List all airplane manufacturers
#[utoipa::path(
    get,
    path = "/api/v1/airplane-manufacturers",
    tag = "fleet",
    responses(
        (status = 200, description = "All manufacturers ordered by name", body = ManufacturerList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_manufacturers(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> impl IntoResponse {
    let service = ManufacturerService::new(state.db.clone());

    match service.list_manufacturers().await {
        Ok(manufacturers) => {
            (StatusCode::OK, Json(ManufacturerList { manufacturers })).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Create a new manufacturer (staff only)
#[utoipa::path(
    post,
    path = "/api/v1/airplane-manufacturers",
    tag = "fleet",
    request_body = CreateManufacturerInput,
    responses(
        (status = 201, description = "Manufacturer created", body = AirplaneManufacturer),
        (status = 403, description = "Requires staff rights", body = ErrorResponse),
        (status = 409, description = "Manufacturer name already exists", body = ErrorResponse)
    )
)]
pub async fn create_manufacturer(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateManufacturerInput>,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = ManufacturerService::new(state.db.clone());

    match service.create_manufacturer(input).await {
        Ok(manufacturer) => (StatusCode::CREATED, Json(manufacturer)).into_response(),
        Err(e) => e.into_response(),
    }
}
