use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use super::InsertOutcome;
use crate::entities::{prelude::*, starships};

#[derive(Debug, Clone, PartialEq)]
pub struct NewStarship {
    pub name: String,
    pub passengers: Option<i64>,
    pub length: Option<f64>,
}

/// Repository for starship rows
pub struct StarshipRepository {
    conn: DatabaseConnection,
}

impl StarshipRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<starships::Model>> {
        Starships::find()
            .order_by_asc(starships::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list starships")
    }

    pub async fn get(&self, id: i32) -> Result<Option<starships::Model>> {
        Starships::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query starship by ID")
    }

    pub async fn create(&self, starship: NewStarship) -> Result<InsertOutcome<starships::Model>> {
        let active = starships::ActiveModel {
            name: Set(starship.name),
            passengers: Set(starship.passengers),
            length: Set(starship.length),
            ..Default::default()
        };

        let outcome = InsertOutcome::from_insert(active.insert(&self.conn).await)
            .context("Failed to insert starship")?;

        if let InsertOutcome::Inserted(model) = &outcome {
            info!("Added starship {}: {}", model.id, model.name);
        }

        Ok(outcome)
    }
}
