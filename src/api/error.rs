use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::{AccountView, CharacterView, ErrorResponse, PlanetView};
use crate::services::{CatalogError, FavoriteError};

/// Record echoed back alongside a conflict.
#[derive(Debug, Clone)]
pub enum Existing {
    Planet(PlanetView),
    Character(CharacterView),
}

/// Every client-side failure is answered with 400; only store faults
/// surface as 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Conflict {
        message: String,
        existing: Option<Existing>,
    },

    #[error("{message}")]
    NoFavorites { message: String, user: AccountView },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::ValidationError(msg) | ApiError::NotFound(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::Conflict { message, existing } => {
                let mut body = ErrorResponse::new(message);
                match existing {
                    Some(Existing::Planet(planet)) => body.planet = Some(planet),
                    Some(Existing::Character(character)) => body.character = Some(character),
                    None => {}
                }
                (StatusCode::BAD_REQUEST, body)
            }
            ApiError::NoFavorites { message, user } => {
                let mut body = ErrorResponse::new(message);
                body.user = Some(user);
                (StatusCode::BAD_REQUEST, body)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("A database error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::CharacterNotFound(_)
            | CatalogError::PlanetNotFound(_)
            | CatalogError::StarshipNotFound(_) => Self::NotFound(message),
            CatalogError::DuplicateCharacter(_) => Self::Conflict {
                message,
                existing: None,
            },
            CatalogError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<FavoriteError> for ApiError {
    fn from(err: FavoriteError) -> Self {
        let message = err.to_string();
        match err {
            FavoriteError::AccountNotFound(_)
            | FavoriteError::PlanetNotFound(_)
            | FavoriteError::CharacterNotFound(_)
            | FavoriteError::PlanetNotFavorite
            | FavoriteError::CharacterNotFavorite => Self::NotFound(message),
            FavoriteError::PlanetAlreadyFavorite(planet) => Self::Conflict {
                message,
                existing: Some(Existing::Planet(planet)),
            },
            FavoriteError::CharacterAlreadyFavorite(character) => Self::Conflict {
                message,
                existing: Some(Existing::Character(character)),
            },
            FavoriteError::NoFavorites(user) => Self::NoFavorites { message, user },
            FavoriteError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }
}
