//! Airplane type HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorResponse;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::airplane_type::{
    AirplaneType, AirplaneTypeListItem, AirplaneTypeService, CreateAirplaneTypeInput,
};
use crate::AppState;

/// List response wrapper
#[derive(Serialize, ToSchema)]
pub struct AirplaneTypeList {
    pub airplane_types: Vec<AirplaneTypeListItem>,
}

/// List all airplane types with manufacturer names
#[utoipa::path(
    get,
    path = "/api/v1/airplane-types",
    tag = "fleet",
    responses(
        (status = 200, description = "All airplane types ordered by name", body = AirplaneTypeList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_airplane_types(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> impl IntoResponse {
    let service = AirplaneTypeService::new(state.db.clone());

    match service.list_airplane_types().await {
        Ok(airplane_types) => {
            (StatusCode::OK, Json(AirplaneTypeList { airplane_types })).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Create a new airplane type (staff only)
#[utoipa::path(
    post,
    path = "/api/v1/airplane-types",
    tag = "fleet",
    request_body = CreateAirplaneTypeInput,
    responses(
        (status = 201, description = "Airplane type created", body = AirplaneType),
        (status = 400, description = "Unknown manufacturer", body = ErrorResponse),
        (status = 403, description = "Requires staff rights", body = ErrorResponse),
        (status = 409, description = "Type already exists for this manufacturer", body = ErrorResponse)
    )
)]
pub async fn create_airplane_type(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateAirplaneTypeInput>,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = AirplaneTypeService::new(state.db.clone());

    match service.create_airplane_type(input).await {
        Ok(airplane_type) => (StatusCode::CREATED, Json(airplane_type)).into_response(),
        Err(e) => e.into_response(),
    }
}
