use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::InsertOutcome;
use crate::entities::{planets, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
}

/// Repository for planet rows
pub struct PlanetRepository {
    conn: DatabaseConnection,
}

impl PlanetRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<planets::Model>> {
        Planets::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list planets")
    }

    pub async fn get(&self, id: i32) -> Result<Option<planets::Model>> {
        Planets::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query planet by ID")
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<planets::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Planets::find()
            .filter(planets::Column::Id.is_in(ids.iter().copied()))
            .all(&self.conn)
            .await
            .context("Failed to query planets by IDs")
    }

    pub async fn create(&self, planet: NewPlanet) -> Result<InsertOutcome<planets::Model>> {
        let active = planets::ActiveModel {
            name: Set(planet.name),
            climate: Set(planet.climate),
            population: Set(planet.population),
            ..Default::default()
        };

        let outcome = InsertOutcome::from_insert(active.insert(&self.conn).await)
            .context("Failed to insert planet")?;

        if let InsertOutcome::Inserted(model) = &outcome {
            info!("Added planet {}: {}", model.id, model.name);
        }

        Ok(outcome)
    }
}
