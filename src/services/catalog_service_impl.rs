//! `SeaORM` implementation of the `CatalogService` trait.

use async_trait::async_trait;

use crate::api::types::{
    AccountView, CharacterView, PlanetDetail, PlanetView, StarshipDetail, StarshipView,
};
use crate::db::{InsertOutcome, NewCharacter, Store};
use crate::services::catalog_service::{CatalogError, CatalogService};

pub struct SeaOrmCatalogService {
    store: Store,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for SeaOrmCatalogService {
    async fn list_accounts(&self) -> Result<Vec<AccountView>, CatalogError> {
        let accounts = self.store.list_accounts().await?;
        Ok(accounts.into_iter().map(AccountView::from).collect())
    }

    async fn list_characters(&self) -> Result<Vec<CharacterView>, CatalogError> {
        let characters = self.store.list_characters().await?;
        Ok(characters.into_iter().map(CharacterView::from).collect())
    }

    async fn get_character(&self, id: i32) -> Result<CharacterView, CatalogError> {
        self.store
            .get_character(id)
            .await?
            .map(CharacterView::from)
            .ok_or(CatalogError::CharacterNotFound(id))
    }

    async fn create_character(
        &self,
        character: NewCharacter,
    ) -> Result<CharacterView, CatalogError> {
        if let Some(planet_id) = character.planet_id {
            if self.store.get_planet(planet_id).await?.is_none() {
                return Err(CatalogError::PlanetNotFound(planet_id));
            }
        }

        if let Some(starship_id) = character.starship_id {
            if self.store.get_starship(starship_id).await?.is_none() {
                return Err(CatalogError::StarshipNotFound(starship_id));
            }
        }

        let name = character.name.clone();
        match self.store.add_character(character).await? {
            InsertOutcome::Inserted(model) => Ok(CharacterView::from(model)),
            InsertOutcome::Duplicate => Err(CatalogError::DuplicateCharacter(name)),
        }
    }

    async fn list_planets(&self) -> Result<Vec<PlanetView>, CatalogError> {
        let planets = self.store.list_planets().await?;
        Ok(planets.into_iter().map(PlanetView::from).collect())
    }

    async fn get_planet(&self, id: i32) -> Result<PlanetDetail, CatalogError> {
        let planet = self
            .store
            .get_planet(id)
            .await?
            .ok_or(CatalogError::PlanetNotFound(id))?;

        let characters = self.store.characters_for_planet(id).await?;

        Ok(PlanetDetail {
            planet: PlanetView::from(planet),
            characters: characters.into_iter().map(CharacterView::from).collect(),
        })
    }

    async fn list_starships(&self) -> Result<Vec<StarshipView>, CatalogError> {
        let starships = self.store.list_starships().await?;
        Ok(starships.into_iter().map(StarshipView::from).collect())
    }

    async fn get_starship(&self, id: i32) -> Result<StarshipDetail, CatalogError> {
        let starship = self
            .store
            .get_starship(id)
            .await?
            .ok_or(CatalogError::StarshipNotFound(id))?;

        let characters = self.store.characters_for_starship(id).await?;

        Ok(StarshipDetail {
            starship: StarshipView::from(starship),
            characters: characters.into_iter().map(CharacterView::from).collect(),
        })
    }
}
