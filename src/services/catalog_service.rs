//! Domain service for the read-mostly catalog: accounts, characters,
//! planets and starships.

use crate::api::types::{
    AccountView, CharacterView, PlanetDetail, PlanetView, StarshipDetail, StarshipView,
};
use crate::db::NewCharacter;
use thiserror::Error;

/// Errors specific to catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("The character with id {0} doesn't exist.")]
    CharacterNotFound(i32),

    #[error("The planet with id {0} doesn't exist.")]
    PlanetNotFound(i32),

    #[error("The starship with id {0} doesn't exist.")]
    StarshipNotFound(i32),

    #[error("A character named '{0}' already exists.")]
    DuplicateCharacter(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for the catalog.
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<AccountView>, CatalogError>;

    async fn list_characters(&self) -> Result<Vec<CharacterView>, CatalogError>;

    async fn get_character(&self, id: i32) -> Result<CharacterView, CatalogError>;

    /// Creates a character. Referenced planet/starship ids must exist.
    async fn create_character(&self, character: NewCharacter)
    -> Result<CharacterView, CatalogError>;

    async fn list_planets(&self) -> Result<Vec<PlanetView>, CatalogError>;

    /// Gets a planet with its resident characters embedded.
    async fn get_planet(&self, id: i32) -> Result<PlanetDetail, CatalogError>;

    async fn list_starships(&self) -> Result<Vec<StarshipView>, CatalogError>;

    /// Gets a starship with its crew embedded.
    async fn get_starship(&self, id: i32) -> Result<StarshipDetail, CatalogError>;
}
