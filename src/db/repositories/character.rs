use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::InsertOutcome;
use crate::entities::{characters, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub gender: String,
    pub species: String,
    pub planet_id: Option<i32>,
    pub starship_id: Option<i32>,
}

/// Repository for character rows
pub struct CharacterRepository {
    conn: DatabaseConnection,
}

impl CharacterRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<characters::Model>> {
        Characters::find()
            .order_by_asc(characters::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list characters")
    }

    pub async fn get(&self, id: i32) -> Result<Option<characters::Model>> {
        Characters::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query character by ID")
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<characters::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Characters::find()
            .filter(characters::Column::Id.is_in(ids.iter().copied()))
            .all(&self.conn)
            .await
            .context("Failed to query characters by IDs")
    }

    pub async fn for_planet(&self, planet_id: i32) -> Result<Vec<characters::Model>> {
        Characters::find()
            .filter(characters::Column::PlanetId.eq(planet_id))
            .order_by_asc(characters::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to query characters by planet")
    }

    pub async fn for_starship(&self, starship_id: i32) -> Result<Vec<characters::Model>> {
        Characters::find()
            .filter(characters::Column::StarshipId.eq(starship_id))
            .order_by_asc(characters::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to query characters by starship")
    }

    /// Names are unique; a clash yields [`InsertOutcome::Duplicate`].
    pub async fn create(&self, character: NewCharacter) -> Result<InsertOutcome<characters::Model>> {
        let active = characters::ActiveModel {
            name: Set(character.name),
            gender: Set(character.gender),
            species: Set(character.species),
            planet_id: Set(character.planet_id),
            starship_id: Set(character.starship_id),
            ..Default::default()
        };

        let outcome = InsertOutcome::from_insert(active.insert(&self.conn).await)
            .context("Failed to insert character")?;

        if let InsertOutcome::Inserted(model) = &outcome {
            info!("Added character {}: {}", model.id, model.name);
        }

        Ok(outcome)
    }
}
