use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;

use super::{AccountView, ApiError, ApiResponse, AppState, FavoritesResponse};

pub async fn hello() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(
        "Hello, this is your GET /user response ",
    ))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<AccountView>>>, ApiError> {
    let accounts = state.catalog_service.list_accounts().await?;
    Ok(Json(ApiResponse::success("get users ok", accounts)))
}

/// `GET /users/{user_id}/favorites`
///
/// An unknown account and an account without favorites are both 400s; the
/// latter echoes the account.
pub async fn get_favorites(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let Path(user_id) = path?;
    let favorites = state.favorite_service.list_for_account(user_id).await?;
    Ok(Json(FavoritesResponse {
        msg: "ok get favorites".to_string(),
        favorites,
    }))
}
