pub mod prelude;

pub mod accounts;
pub mod characters;
pub mod favorite_characters;
pub mod favorite_planets;
pub mod planets;
pub mod starships;
pub mod users;
