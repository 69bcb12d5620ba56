use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, StarshipDetail, StarshipView};

pub async fn list_starships(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<StarshipView>>>, ApiError> {
    let starships = state.catalog_service.list_starships().await?;
    Ok(Json(ApiResponse::success("get starship ok", starships)))
}

pub async fn get_starship(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<StarshipDetail>>, ApiError> {
    let Path(id) = path?;
    let starship = state.catalog_service.get_starship(id).await?;
    Ok(Json(ApiResponse::success(
        format!("get starship with id {id} ok"),
        starship,
    )))
}
