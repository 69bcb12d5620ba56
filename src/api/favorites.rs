use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};

type PairPath = Result<Path<(i32, i32)>, PathRejection>;

pub async fn add_planet(
    State(state): State<Arc<AppState>>,
    path: PairPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let Path((user_id, planet_id)) = path?;
    state.favorite_service.add_planet(user_id, planet_id).await?;
    Ok(Json(ApiResponse::message("Planet added to favorites.")))
}

pub async fn remove_planet(
    State(state): State<Arc<AppState>>,
    path: PairPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let Path((user_id, planet_id)) = path?;
    state
        .favorite_service
        .remove_planet(user_id, planet_id)
        .await?;
    Ok(Json(ApiResponse::message(
        "The planet has been removed from favorites.",
    )))
}

pub async fn add_character(
    State(state): State<Arc<AppState>>,
    path: PairPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let Path((user_id, character_id)) = path?;
    state
        .favorite_service
        .add_character(user_id, character_id)
        .await?;
    Ok(Json(ApiResponse::message("Character added to favorites.")))
}

pub async fn remove_character(
    State(state): State<Arc<AppState>>,
    path: PairPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let Path((user_id, character_id)) = path?;
    state
        .favorite_service
        .remove_character(user_id, character_id)
        .await?;
    Ok(Json(ApiResponse::message(
        "The character has been removed from favorites",
    )))
}
