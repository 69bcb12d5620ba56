//! `SeaORM` implementation of the `FavoriteService` trait.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::api::types::{AccountView, CharacterView, FavoritesDto, PlanetView};
use crate::db::{InsertOutcome, Store};
use crate::services::favorite_service::{FavoriteError, FavoriteService};

pub struct SeaOrmFavoriteService {
    store: Store,
}

impl SeaOrmFavoriteService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn require_account(&self, account_id: i32) -> Result<AccountView, FavoriteError> {
        self.store
            .get_account(account_id)
            .await?
            .map(AccountView::from)
            .ok_or(FavoriteError::AccountNotFound(account_id))
    }

    fn record_change(kind: &'static str, action: &'static str) {
        metrics::counter!("favorites_changed_total", "kind" => kind, "action" => action)
            .increment(1);
    }
}

#[async_trait]
impl FavoriteService for SeaOrmFavoriteService {
    async fn add_planet(&self, account_id: i32, planet_id: i32) -> Result<(), FavoriteError> {
        self.require_account(account_id).await?;
        let planet = self
            .store
            .get_planet(planet_id)
            .await?
            .ok_or(FavoriteError::PlanetNotFound(planet_id))?;

        match self.store.add_favorite_planet(account_id, planet_id).await? {
            InsertOutcome::Inserted(_) => {
                Self::record_change("planet", "added");
                Ok(())
            }
            InsertOutcome::Duplicate => {
                Err(FavoriteError::PlanetAlreadyFavorite(PlanetView::from(planet)))
            }
        }
    }

    async fn remove_planet(&self, account_id: i32, planet_id: i32) -> Result<(), FavoriteError> {
        if self
            .store
            .remove_favorite_planet(account_id, planet_id)
            .await?
        {
            Self::record_change("planet", "removed");
            Ok(())
        } else {
            Err(FavoriteError::PlanetNotFavorite)
        }
    }

    async fn add_character(
        &self,
        account_id: i32,
        character_id: i32,
    ) -> Result<(), FavoriteError> {
        self.require_account(account_id).await?;
        let character = self
            .store
            .get_character(character_id)
            .await?
            .ok_or(FavoriteError::CharacterNotFound(character_id))?;

        match self
            .store
            .add_favorite_character(account_id, character_id)
            .await?
        {
            InsertOutcome::Inserted(_) => {
                Self::record_change("character", "added");
                Ok(())
            }
            InsertOutcome::Duplicate => Err(FavoriteError::CharacterAlreadyFavorite(
                CharacterView::from(character),
            )),
        }
    }

    async fn remove_character(
        &self,
        account_id: i32,
        character_id: i32,
    ) -> Result<(), FavoriteError> {
        if self
            .store
            .remove_favorite_character(account_id, character_id)
            .await?
        {
            Self::record_change("character", "removed");
            Ok(())
        } else {
            Err(FavoriteError::CharacterNotFavorite)
        }
    }

    async fn list_for_account(&self, account_id: i32) -> Result<FavoritesDto, FavoriteError> {
        let user = self.require_account(account_id).await?;

        let favorite_characters = self.store.favorite_characters_for_account(account_id).await?;
        let favorite_planets = self.store.favorite_planets_for_account(account_id).await?;

        if favorite_characters.is_empty() && favorite_planets.is_empty() {
            return Err(FavoriteError::NoFavorites(user));
        }

        let character_ids: Vec<i32> = favorite_characters
            .iter()
            .map(|f| f.character_id)
            .collect();
        let mut characters: HashMap<i32, CharacterView> = self
            .store
            .get_characters_by_ids(&character_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, CharacterView::from(c)))
            .collect();

        let planet_ids: Vec<i32> = favorite_planets.iter().map(|f| f.planet_id).collect();
        let mut planets: HashMap<i32, PlanetView> = self
            .store
            .get_planets_by_ids(&planet_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, PlanetView::from(p)))
            .collect();

        // Favorite order, not id order
        Ok(FavoritesDto {
            user,
            characters: character_ids
                .iter()
                .filter_map(|id| characters.remove(id))
                .collect(),
            planets: planet_ids
                .iter()
                .filter_map(|id| planets.remove(id))
                .collect(),
        })
    }
}
