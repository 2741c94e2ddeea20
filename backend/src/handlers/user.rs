//! User account and token handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, ErrorResponse};
use crate::middleware::CurrentUser;
use crate::services::auth::{AuthTokens, RegisterInput, UserProfile};
use crate::services::AuthService;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct TokenRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/v1/user/register",
    tag = "user",
    request_body = RegisterInput,
    responses(
        (status = 201, description = "Account created", body = UserProfile),
        (status = 400, description = "Invalid email or password", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterInput>,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let profile = auth_service.register(body).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Obtain an access/refresh token pair
#[utoipa::path(
    post,
    path = "/api/v1/user/token",
    tag = "user",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token pair issued", body = AuthTokens),
        (status = 401, description = "Invalid credentials or disabled account", body = ErrorResponse)
    )
)]
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(body): Json<TokenRequest>,
) -> Result<Json<AuthTokens>, AppError> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let tokens = auth_service.login(&body.email, &body.password).await?;

    Ok(Json(tokens))
}

/// Rotate a refresh token into a new token pair
#[utoipa::path(
    post,
    path = "/api/v1/user/token/refresh",
    tag = "user",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "Token pair issued", body = AuthTokens),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorResponse)
    )
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<AuthTokens>, AppError> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let tokens = auth_service.refresh_token(&body.refresh_token).await?;

    Ok(Json(tokens))
}

/// Current user profile
#[utoipa::path(
    get,
    path = "/api/v1/user/me",
    tag = "user",
    responses(
        (status = 200, description = "Current user", body = UserProfile),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn me(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<UserProfile>, AppError> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let profile = auth_service.get_profile(current_user.0.user_id).await?;

    Ok(Json(profile))
}
