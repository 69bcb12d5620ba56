use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, PlanetDetail, PlanetView};

pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PlanetView>>>, ApiError> {
    let planets = state.catalog_service.list_planets().await?;
    Ok(Json(ApiResponse::success("get planets ok", planets)))
}

pub async fn get_planet(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<PlanetDetail>>, ApiError> {
    let Path(id) = path?;
    let planet = state.catalog_service.get_planet(id).await?;
    Ok(Json(ApiResponse::success(
        format!("get planet with id {id} ok"),
        planet,
    )))
}
