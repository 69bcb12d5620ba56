//! Domain service for per-account favorites.
//!
//! Adding a favorite relies on the unique `(account, target)` index: a second
//! add of the same pair is reported as [`FavoriteError::PlanetAlreadyFavorite`]
//! or [`FavoriteError::CharacterAlreadyFavorite`] with the target echoed back,
//! even when two requests race.

use crate::api::types::{AccountView, CharacterView, FavoritesDto, PlanetView};
use thiserror::Error;

/// Errors specific to favorite operations.
#[derive(Debug, Error)]
pub enum FavoriteError {
    #[error("The user with id {0} doesn't exist.")]
    AccountNotFound(i32),

    #[error("The planet with id {0} doesn't exist.")]
    PlanetNotFound(i32),

    #[error("The character with id {0} doesn't exist.")]
    CharacterNotFound(i32),

    #[error("The planet is already added as a favorite.")]
    PlanetAlreadyFavorite(PlanetView),

    #[error("The character is already added as a favorite.")]
    CharacterAlreadyFavorite(CharacterView),

    #[error("Planet isn't in favorites or invalid user")]
    PlanetNotFavorite,

    #[error("Character isn't in favorites or invalid user")]
    CharacterNotFavorite,

    #[error("The user with id {} doesn't have any favorite.", .0.id)]
    NoFavorites(AccountView),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for FavoriteError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for FavoriteError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for favorites.
#[async_trait::async_trait]
pub trait FavoriteService: Send + Sync {
    async fn add_planet(&self, account_id: i32, planet_id: i32) -> Result<(), FavoriteError>;

    async fn remove_planet(&self, account_id: i32, planet_id: i32) -> Result<(), FavoriteError>;

    async fn add_character(&self, account_id: i32, character_id: i32)
    -> Result<(), FavoriteError>;

    async fn remove_character(
        &self,
        account_id: i32,
        character_id: i32,
    ) -> Result<(), FavoriteError>;

    /// Lists an account's favorites. An account with none at all is an error
    /// carrying the account view.
    async fn list_for_account(&self, account_id: i32) -> Result<FavoritesDto, FavoriteError>;
}
