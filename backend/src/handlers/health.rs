//! Health check handler

/// Service health probe
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check() -> &'static str {
    "OK"
}
