use serde::Serialize;

use crate::db::Account;
use crate::entities::{characters, planets, starships};

/// Success envelope: `{msg, data?}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(msg: impl Into<String>, data: T) -> Self {
        Self {
            msg: msg.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            data: None,
        }
    }
}

/// Failure envelope. Only `msg` is always present; the other fields echo
/// the record the failure is about.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet: Option<PlanetView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterView>,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            user: None,
            planet: None,
            character: None,
        }
    }
}

/// Public view of an account. There is deliberately no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterView {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub species: String,
}

impl From<characters::Model> for CharacterView {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            species: model.species,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetView {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
}

impl From<planets::Model> for PlanetView {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            population: model.population,
        }
    }
}

/// A planet together with the characters that call it home.
#[derive(Debug, Clone, Serialize)]
pub struct PlanetDetail {
    #[serde(flatten)]
    pub planet: PlanetView,
    pub characters: Vec<CharacterView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarshipView {
    pub id: i32,
    pub name: String,
    pub passengers: Option<i64>,
    pub length: Option<f64>,
}

impl From<starships::Model> for StarshipView {
    fn from(model: starships::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            passengers: model.passengers,
            length: model.length,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StarshipDetail {
    #[serde(flatten)]
    pub starship: StarshipView,
    pub characters: Vec<CharacterView>,
}

/// Everything an account has marked as favorite.
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesDto {
    pub user: AccountView,
    pub characters: Vec<CharacterView>,
    pub planets: Vec<PlanetView>,
}

/// `{msg, user, characters, planets}`
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub msg: String,
    #[serde(flatten)]
    pub favorites: FavoritesDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub method: &'static str,
    pub path: &'static str,
}
