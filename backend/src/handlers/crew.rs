//! Crew and crew position HTTP handlers
//!
//! All crew endpoints are staff-only, reads included.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorResponse;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::crew::{
    CreateCrewInput, CreateCrewPositionInput, Crew, CrewListItem, CrewPosition, CrewService,
};
use crate::AppState;

/// List response wrapper
#[derive(Serialize, ToSchema)]
pub struct CrewPositionList {
    pub crew_positions: Vec<CrewPosition>,
}

/// List response wrapper
#[derive(Serialize, ToSchema)]
pub struct CrewList {
    pub crews: Vec<CrewListItem>,
}

/// List all crew positions (staff only)
#[utoipa::path(
    get,
    path = "/api/v1/crew-positions",
    tag = "crew",
    responses(
        (status = 200, description = "All crew positions ordered by name", body = CrewPositionList),
        (status = 403, description = "Requires staff rights", body = ErrorResponse)
    )
)]
pub async fn list_crew_positions(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = CrewService::new(state.db.clone());

    match service.list_positions().await {
        Ok(crew_positions) => {
            (StatusCode::OK, Json(CrewPositionList { crew_positions })).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Create a new crew position (staff only)
#[utoipa::path(
    post,
    path = "/api/v1/crew-positions",
    tag = "crew",
    request_body = CreateCrewPositionInput,
    responses(
        (status = 201, description = "Crew position created", body = CrewPosition),
        (status = 403, description = "Requires staff rights", body = ErrorResponse),
        (status = 409, description = "Position name already exists", body = ErrorResponse)
    )
)]
pub async fn create_crew_position(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateCrewPositionInput>,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = CrewService::new(state.db.clone());

    match service.create_position(input).await {
        Ok(position) => (StatusCode::CREATED, Json(position)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all crew members with position names (staff only)
#[utoipa::path(
    get,
    path = "/api/v1/crews",
    tag = "crew",
    responses(
        (status = 200, description = "All crew ordered by position and name", body = CrewList),
        (status = 403, description = "Requires staff rights", body = ErrorResponse)
    )
)]
pub async fn list_crew(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = CrewService::new(state.db.clone());

    match service.list_crew().await {
        Ok(crews) => (StatusCode::OK, Json(CrewList { crews })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new crew member (staff only)
#[utoipa::path(
    post,
    path = "/api/v1/crews",
    tag = "crew",
    request_body = CreateCrewInput,
    responses(
        (status = 201, description = "Crew member created", body = Crew),
        (status = 400, description = "Unknown position or empty name", body = ErrorResponse),
        (status = 403, description = "Requires staff rights", body = ErrorResponse),
        (status = 409, description = "Crew member already exists", body = ErrorResponse)
    )
)]
pub async fn create_crew(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateCrewInput>,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = CrewService::new(state.db.clone());

    match service.create_crew(input).await {
        Ok(crew) => (StatusCode::CREATED, Json(crew)).into_response(),
        Err(e) => e.into_response(),
    }
}
