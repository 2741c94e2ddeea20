//! Order HTTP handlers
//!
//! Orders are strictly scoped to the authenticated user.

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
use crate::middleware::CurrentUser;
use crate::services::order::{
    CreateOrderInput, Order, OrderDetail, OrderListItem, OrderService, ORDERS_PER_PAGE,
};
use crate::AppState;

/// List the current user's orders, newest first
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "orders",
    params(PageParams),
    responses(
        (status = 200, description = "The user's orders", body = PaginatedResponse<OrderListItem>),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(page): Query<PageParams>,
) -> impl IntoResponse {
    let pagination = Pagination::clamped(page.page, page.per_page, ORDERS_PER_PAGE);
    let service = OrderService::new(state.db.clone());

    match service
        .list_orders(current_user.0.user_id, pagination)
        .await
    {
        Ok(orders) => (StatusCode::OK, Json(orders)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get one of the current user's orders, tickets grouped per flight
#[utoipa::path(
    get,
    path = "/api/v1/orders/{order_id}",
    tag = "orders",
    params(("order_id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order detail", body = OrderDetail),
        (status = 404, description = "Unknown or foreign order", body = ErrorResponse)
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(order_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.get_order(current_user.0.user_id, order_id).await {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Book tickets as a new order
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "orders",
    request_body = CreateOrderInput,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Empty order or seat outside the cabin", body = ErrorResponse),
        (status = 404, description = "Unknown flight", body = ErrorResponse),
        (status = 409, description = "Seat already taken", body = ErrorResponse)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateOrderInput>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.create_order(current_user.0.user_id, input).await {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete one of the current user's orders
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{order_id}",
    tag = "orders",
    params(("order_id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Unknown or foreign order", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(order_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.delete_order(current_user.0.user_id, order_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
