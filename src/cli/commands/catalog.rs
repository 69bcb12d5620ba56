//! Planet and starship command handlers

use crate::config::Config;
use crate::db::{NewPlanet, NewStarship, Store};

pub async fn cmd_planet_add(
    config: &Config,
    name: &str,
    climate: Option<&str>,
    population: Option<i64>,
) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    let outcome = store
        .add_planet(NewPlanet {
            name: name.to_string(),
            climate: climate.map(str::to_string),
            population,
        })
        .await?;

    match outcome.inserted() {
        Some(planet) => println!("✓ Planet {} added: {}", planet.id, planet.name),
        None => println!("A planet named '{name}' already exists."),
    }

    Ok(())
}

pub async fn cmd_starship_add(
    config: &Config,
    name: &str,
    passengers: Option<i64>,
    length: Option<f64>,
) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    let outcome = store
        .add_starship(NewStarship {
            name: name.to_string(),
            passengers,
            length,
        })
        .await?;

    match outcome.inserted() {
        Some(starship) => println!("✓ Starship {} added: {}", starship.id, starship.name),
        None => println!("A starship named '{name}' already exists."),
    }

    Ok(())
}
