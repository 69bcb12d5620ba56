use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::GeneralConfig;
use crate::entities::{characters, favorite_characters, favorite_planets, planets, starships};

pub mod migrator;
pub mod repositories;

pub use repositories::InsertOutcome;
pub use repositories::account::{Account, NewAccount};
pub use repositories::character::NewCharacter;
pub use repositories::planet::NewPlanet;
pub use repositories::starship::NewStarship;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// Opens the store described by `[general]`, pool bounds included.
    pub async fn from_config(general: &GeneralConfig) -> Result<Self> {
        Self::with_pool_options(
            &general.database_url,
            general.max_db_connections,
            general.min_db_connections,
        )
        .await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url
                .trim_start_matches("sqlite:")
                .trim_start_matches("//")
                .split('?')
                .next()
                .unwrap_or_default();
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn account_repo(&self) -> repositories::account::AccountRepository {
        repositories::account::AccountRepository::new(self.conn.clone())
    }

    fn character_repo(&self) -> repositories::character::CharacterRepository {
        repositories::character::CharacterRepository::new(self.conn.clone())
    }

    fn planet_repo(&self) -> repositories::planet::PlanetRepository {
        repositories::planet::PlanetRepository::new(self.conn.clone())
    }

    fn starship_repo(&self) -> repositories::starship::StarshipRepository {
        repositories::starship::StarshipRepository::new(self.conn.clone())
    }

    fn favorite_repo(&self) -> repositories::favorite::FavoriteRepository {
        repositories::favorite::FavoriteRepository::new(self.conn.clone())
    }

    // Accounts

    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.account_repo().list_all().await
    }

    pub async fn get_account(&self, id: i32) -> Result<Option<Account>> {
        self.account_repo().get_by_id(id).await
    }

    pub async fn add_account(&self, account: NewAccount) -> Result<InsertOutcome<Account>> {
        self.account_repo().create(account).await
    }

    // Characters

    pub async fn list_characters(&self) -> Result<Vec<characters::Model>> {
        self.character_repo().list_all().await
    }

    pub async fn get_character(&self, id: i32) -> Result<Option<characters::Model>> {
        self.character_repo().get(id).await
    }

    pub async fn get_characters_by_ids(&self, ids: &[i32]) -> Result<Vec<characters::Model>> {
        self.character_repo().get_by_ids(ids).await
    }

    pub async fn characters_for_planet(&self, planet_id: i32) -> Result<Vec<characters::Model>> {
        self.character_repo().for_planet(planet_id).await
    }

    pub async fn characters_for_starship(
        &self,
        starship_id: i32,
    ) -> Result<Vec<characters::Model>> {
        self.character_repo().for_starship(starship_id).await
    }

    pub async fn add_character(
        &self,
        character: NewCharacter,
    ) -> Result<InsertOutcome<characters::Model>> {
        self.character_repo().create(character).await
    }

    // Planets

    pub async fn list_planets(&self) -> Result<Vec<planets::Model>> {
        self.planet_repo().list_all().await
    }

    pub async fn get_planet(&self, id: i32) -> Result<Option<planets::Model>> {
        self.planet_repo().get(id).await
    }

    pub async fn get_planets_by_ids(&self, ids: &[i32]) -> Result<Vec<planets::Model>> {
        self.planet_repo().get_by_ids(ids).await
    }

    pub async fn add_planet(&self, planet: NewPlanet) -> Result<InsertOutcome<planets::Model>> {
        self.planet_repo().create(planet).await
    }

    // Starships

    pub async fn list_starships(&self) -> Result<Vec<starships::Model>> {
        self.starship_repo().list_all().await
    }

    pub async fn get_starship(&self, id: i32) -> Result<Option<starships::Model>> {
        self.starship_repo().get(id).await
    }

    pub async fn add_starship(
        &self,
        starship: NewStarship,
    ) -> Result<InsertOutcome<starships::Model>> {
        self.starship_repo().create(starship).await
    }

    // Favorites

    pub async fn add_favorite_planet(
        &self,
        account_id: i32,
        planet_id: i32,
    ) -> Result<InsertOutcome<favorite_planets::Model>> {
        self.favorite_repo().add_planet(account_id, planet_id).await
    }

    pub async fn remove_favorite_planet(&self, account_id: i32, planet_id: i32) -> Result<bool> {
        self.favorite_repo()
            .remove_planet(account_id, planet_id)
            .await
    }

    pub async fn favorite_planets_for_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<favorite_planets::Model>> {
        self.favorite_repo().planets_for_account(account_id).await
    }

    pub async fn add_favorite_character(
        &self,
        account_id: i32,
        character_id: i32,
    ) -> Result<InsertOutcome<favorite_characters::Model>> {
        self.favorite_repo()
            .add_character(account_id, character_id)
            .await
    }

    pub async fn remove_favorite_character(
        &self,
        account_id: i32,
        character_id: i32,
    ) -> Result<bool> {
        self.favorite_repo()
            .remove_character(account_id, character_id)
            .await
    }

    pub async fn favorite_characters_for_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<favorite_characters::Model>> {
        self.favorite_repo()
            .characters_for_account(account_id)
            .await
    }
}
