use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;

use super::validation::parse_character_body;
use super::{ApiError, ApiResponse, AppState, CharacterView};

pub async fn list_characters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CharacterView>>>, ApiError> {
    let characters = state.catalog_service.list_characters().await?;
    Ok(Json(ApiResponse::success("get characters ok", characters)))
}

pub async fn get_character(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<CharacterView>>, ApiError> {
    let Path(id) = path?;
    let character = state.catalog_service.get_character(id).await?;
    Ok(Json(ApiResponse::success(
        format!("get character with id {id} ok"),
        character,
    )))
}

/// `POST /characters`
///
/// The body is read raw so that a missing or malformed body gets the same
/// 400 envelope as a missing field.
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse<CharacterView>>, ApiError> {
    let new_character = parse_character_body(&body)?;
    let character = state.catalog_service.create_character(new_character).await?;
    Ok(Json(ApiResponse::success("Character added", character)))
}
