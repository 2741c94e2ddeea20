//! Route management HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorResponse;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::route::{CreateRouteInput, Route, RouteListItem, RouteService};
use crate::AppState;

/// List response wrapper
#[derive(Serialize, ToSchema)]
pub struct RouteList {
    pub routes: Vec<RouteListItem>,
}

/// List all routes with rendered airport labels
#[utoipa::path(
    get,
    path = "/api/v1/routes",
    tag = "routes",
    responses(
        (status = 200, description = "All routes ordered by their endpoints", body = RouteList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_routes(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> impl IntoResponse {
    let service = RouteService::new(state.db.clone());

    match service.list_routes().await {
        Ok(routes) => (StatusCode::OK, Json(RouteList { routes })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new route (staff only)
#[utoipa::path(
    post,
    path = "/api/v1/routes",
    tag = "routes",
    request_body = CreateRouteInput,
    responses(
        (status = 201, description = "Route created", body = Route),
        (status = 400, description = "Unknown airport or invalid distance", body = ErrorResponse),
        (status = 403, description = "Requires staff rights", body = ErrorResponse)
    )
)]
pub async fn create_route(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateRouteInput>,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = RouteService::new(state.db.clone());

    match service.create_route(input).await {
        Ok(route) => (StatusCode::CREATED, Json(route)).into_response(),
        Err(e) => e.into_response(),
    }
}
