use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::InsertOutcome;
use crate::entities::{favorite_characters, favorite_planets, prelude::*};

/// Repository for the favorite join tables.
///
/// Pairs are unique at the storage level, so `add_*` never needs a prior
/// existence check: a second insert of the same pair comes back as
/// [`InsertOutcome::Duplicate`].
pub struct FavoriteRepository {
    conn: DatabaseConnection,
}

impl FavoriteRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Favorite Planets
    // ========================================================================

    pub async fn add_planet(
        &self,
        account_id: i32,
        planet_id: i32,
    ) -> Result<InsertOutcome<favorite_planets::Model>> {
        let active = favorite_planets::ActiveModel {
            account_id: Set(account_id),
            planet_id: Set(planet_id),
            ..Default::default()
        };

        let outcome = InsertOutcome::from_insert(active.insert(&self.conn).await)
            .context("Failed to insert favorite planet")?;

        if matches!(outcome, InsertOutcome::Inserted(_)) {
            info!("Account {} added planet {} to favorites", account_id, planet_id);
        }

        Ok(outcome)
    }

    pub async fn remove_planet(&self, account_id: i32, planet_id: i32) -> Result<bool> {
        let result = FavoritePlanets::delete_many()
            .filter(favorite_planets::Column::AccountId.eq(account_id))
            .filter(favorite_planets::Column::PlanetId.eq(planet_id))
            .exec(&self.conn)
            .await
            .context("Failed to delete favorite planet")?;

        Ok(result.rows_affected > 0)
    }

    pub async fn planets_for_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<favorite_planets::Model>> {
        FavoritePlanets::find()
            .filter(favorite_planets::Column::AccountId.eq(account_id))
            .order_by_asc(favorite_planets::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to query favorite planets for account")
    }

    // ========================================================================
    // Favorite Characters
    // ========================================================================

    pub async fn add_character(
        &self,
        account_id: i32,
        character_id: i32,
    ) -> Result<InsertOutcome<favorite_characters::Model>> {
        let active = favorite_characters::ActiveModel {
            account_id: Set(account_id),
            character_id: Set(character_id),
            ..Default::default()
        };

        let outcome = InsertOutcome::from_insert(active.insert(&self.conn).await)
            .context("Failed to insert favorite character")?;

        if matches!(outcome, InsertOutcome::Inserted(_)) {
            info!(
                "Account {} added character {} to favorites",
                account_id, character_id
            );
        }

        Ok(outcome)
    }

    pub async fn remove_character(&self, account_id: i32, character_id: i32) -> Result<bool> {
        let result = FavoriteCharacters::delete_many()
            .filter(favorite_characters::Column::AccountId.eq(account_id))
            .filter(favorite_characters::Column::CharacterId.eq(character_id))
            .exec(&self.conn)
            .await
            .context("Failed to delete favorite character")?;

        Ok(result.rows_affected > 0)
    }

    pub async fn characters_for_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<favorite_characters::Model>> {
        FavoriteCharacters::find()
            .filter(favorite_characters::Column::AccountId.eq(account_id))
            .order_by_asc(favorite_characters::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to query favorite characters for account")
    }
}
