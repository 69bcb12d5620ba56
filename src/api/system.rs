//! Introspection endpoints: sitemap and health probes.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, RouteDto};

/// Every route the router registers, in registration order.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health/live"),
    ("GET", "/health/ready"),
    ("GET", "/metrics"),
    ("GET", "/user"),
    ("GET", "/users"),
    ("GET", "/users/{user_id}/favorites"),
    ("GET", "/characters"),
    ("POST", "/characters"),
    ("GET", "/characters/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/starships"),
    ("GET", "/starships/{id}"),
    ("POST", "/favorite/{user_id}/planet/{planet_id}"),
    ("DELETE", "/favorite/{user_id}/planet/{planet_id}"),
    ("POST", "/favorite/{user_id}/character/{character_id}"),
    ("DELETE", "/favorite/{user_id}/character/{character_id}"),
];

/// Lists the registered routes.
///
/// # Endpoint
/// `GET /`
pub async fn sitemap() -> Json<ApiResponse<Vec<RouteDto>>> {
    let routes = ROUTES
        .iter()
        .map(|&(method, path)| RouteDto { method, path })
        .collect();

    Json(ApiResponse::success(
        format!("holonet v{}", env!("CARGO_PKG_VERSION")),
        routes,
    ))
}

/// # Endpoint
/// `GET /health/live`
pub async fn health_live() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("alive"))
}

/// Readiness: the store answers a trivial query. `data` is the uptime in
/// seconds.
///
/// # Endpoint
/// `GET /health/ready`
pub async fn health_ready(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<u64>>, ApiError> {
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::DatabaseError(format!("Readiness check failed: {e:#}")))?;

    Ok(Json(ApiResponse::success(
        "ready",
        state.start_time.elapsed().as_secs(),
    )))
}
