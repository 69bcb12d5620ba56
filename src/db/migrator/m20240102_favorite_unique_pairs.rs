use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        // Collapse duplicates left behind by check-then-insert writers
        conn.execute_unprepared(
            "DELETE FROM favorite_characters WHERE id NOT IN (SELECT MIN(id) FROM favorite_characters GROUP BY account_id, character_id)",
        )
        .await?;

        conn.execute_unprepared(
            "DELETE FROM favorite_planets WHERE id NOT IN (SELECT MIN(id) FROM favorite_planets GROUP BY account_id, planet_id)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_favorite_characters_pair ON favorite_characters(account_id, character_id)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_favorite_planets_pair ON favorite_planets(account_id, planet_id)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_characters_planet_id ON characters(planet_id)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_characters_starship_id ON characters(starship_id)",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("DROP INDEX IF EXISTS idx_characters_starship_id")
            .await?;
        conn.execute_unprepared("DROP INDEX IF EXISTS idx_characters_planet_id")
            .await?;
        conn.execute_unprepared("DROP INDEX IF EXISTS idx_favorite_planets_pair")
            .await?;
        conn.execute_unprepared("DROP INDEX IF EXISTS idx_favorite_characters_pair")
            .await?;

        Ok(())
    }
}
