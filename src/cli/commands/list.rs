//! List command handler

use crate::cli::ListKind;
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list(config: &Config, kind: ListKind) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    match kind {
        ListKind::Accounts => {
            let accounts = store.list_accounts().await?;
            println!("Accounts ({} total)", accounts.len());
            println!("{:-<60}", "");
            for account in accounts {
                let last_name = account.last_name.as_deref().unwrap_or("");
                println!(
                    "[{}] {} {} <{}>",
                    account.id, account.first_name, last_name, account.email
                );
            }
        }
        ListKind::Characters => {
            let characters = store.list_characters().await?;
            println!("Characters ({} total)", characters.len());
            println!("{:-<60}", "");
            for character in characters {
                println!(
                    "[{}] {} | {} | {}",
                    character.id, character.name, character.gender, character.species
                );
            }
        }
        ListKind::Planets => {
            let planets = store.list_planets().await?;
            println!("Planets ({} total)", planets.len());
            println!("{:-<60}", "");
            for planet in planets {
                let climate = planet.climate.as_deref().unwrap_or("?");
                let population = planet
                    .population
                    .map_or_else(|| "?".to_string(), |p| p.to_string());
                println!(
                    "[{}] {} | climate: {} | population: {}",
                    planet.id, planet.name, climate, population
                );
            }
        }
        ListKind::Starships => {
            let starships = store.list_starships().await?;
            println!("Starships ({} total)", starships.len());
            println!("{:-<60}", "");
            for starship in starships {
                let passengers = starship
                    .passengers
                    .map_or_else(|| "?".to_string(), |p| p.to_string());
                let length = starship
                    .length
                    .map_or_else(|| "?".to_string(), |l| format!("{l}m"));
                println!(
                    "[{}] {} | passengers: {} | length: {}",
                    starship.id, starship.name, passengers, length
                );
            }
        }
    }

    Ok(())
}
