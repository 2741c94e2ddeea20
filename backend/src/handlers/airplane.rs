//! Airplane fleet HTTP handlers

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, ErrorResponse};
use crate::middleware::{require_admin, CurrentUser};
use crate::services::airplane::{
    Airplane, AirplaneDetail, AirplaneImage, AirplaneListItem, AirplaneService,
    CreateAirplaneInput,
};
use crate::AppState;

/// List response wrapper
#[derive(Serialize, ToSchema)]
pub struct AirplaneList {
    pub airplanes: Vec<AirplaneListItem>,
}

/// List all airplanes with type and manufacturer names
#[utoipa::path(
    get,
    path = "/api/v1/airplanes",
    tag = "fleet",
    responses(
        (status = 200, description = "All airplanes ordered by name", body = AirplaneList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_airplanes(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> impl IntoResponse {
    let service = AirplaneService::new(state.db.clone());

    match service.list_airplanes().await {
        Ok(airplanes) => (StatusCode::OK, Json(AirplaneList { airplanes })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific airplane with its type nested
#[utoipa::path(
    get,
    path = "/api/v1/airplanes/{airplane_id}",
    tag = "fleet",
    params(("airplane_id" = Uuid, Path, description = "Airplane id")),
    responses(
        (status = 200, description = "Airplane detail", body = AirplaneDetail),
        (status = 404, description = "Unknown airplane", body = ErrorResponse)
    )
)]
pub async fn get_airplane(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(airplane_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = AirplaneService::new(state.db.clone());

    match service.get_airplane(airplane_id).await {
        Ok(airplane) => (StatusCode::OK, Json(airplane)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new airplane (staff only)
#[utoipa::path(
    post,
    path = "/api/v1/airplanes",
    tag = "fleet",
    request_body = CreateAirplaneInput,
    responses(
        (status = 201, description = "Airplane created", body = Airplane),
        (status = 400, description = "Invalid cabin layout or unknown type", body = ErrorResponse),
        (status = 403, description = "Requires staff rights", body = ErrorResponse)
    )
)]
pub async fn create_airplane(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateAirplaneInput>,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let service = AirplaneService::new(state.db.clone());

    match service.create_airplane(input).await {
        Ok(airplane) => (StatusCode::CREATED, Json(airplane)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Upload an image for an airplane (staff only).
/// Expects a multipart form with an "image" file field.
#[utoipa::path(
    post,
    path = "/api/v1/airplanes/{airplane_id}/upload-image",
    tag = "fleet",
    params(("airplane_id" = Uuid, Path, description = "Airplane id")),
    responses(
        (status = 200, description = "Image stored", body = AirplaneImage),
        (status = 400, description = "Missing or unreadable image field", body = ErrorResponse),
        (status = 403, description = "Requires staff rights", body = ErrorResponse),
        (status = 404, description = "Unknown airplane", body = ErrorResponse)
    )
)]
pub async fn upload_airplane_image(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(airplane_id): Path<Uuid>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    if let Err(e) = require_admin(&current_user.0) {
        return e.into_response();
    }

    let mut upload: Option<(String, Vec<u8>)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("image") {
                    let filename = field.file_name().unwrap_or("upload").to_string();
                    match field.bytes().await {
                        Ok(bytes) => {
                            upload = Some((filename, bytes.to_vec()));
                            break;
                        }
                        Err(_) => {
                            return AppError::ValidationError(
                                "Could not read uploaded file".to_string(),
                            )
                            .into_response()
                        }
                    }
                }
            }
            Ok(None) => break,
            Err(_) => {
                return AppError::ValidationError("Malformed multipart body".to_string())
                    .into_response()
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return AppError::Validation {
            field: "image".to_string(),
            message: "An image file is required".to_string(),
        }
        .into_response();
    };

    let service = AirplaneService::new(state.db.clone());

    match service
        .store_image(airplane_id, &filename, &bytes, &state.config.media.root)
        .await
    {
        Ok(image) => (StatusCode::OK, Json(image)).into_response(),
        Err(e) => e.into_response(),
    }
}
