pub mod account;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;

use sea_orm::{DbErr, SqlErr};

/// Result of an insert guarded by a UNIQUE constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome<T> {
    Inserted(T),
    Duplicate,
}

impl<T> InsertOutcome<T> {
    /// Folds a unique-constraint violation into [`InsertOutcome::Duplicate`];
    /// every other error is passed through.
    pub(crate) fn from_insert(result: Result<T, DbErr>) -> Result<Self, DbErr> {
        match result {
            Ok(model) => Ok(Self::Inserted(model)),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Ok(Self::Duplicate),
                _ => Err(err),
            },
        }
    }

    #[must_use]
    pub fn inserted(self) -> Option<T> {
        match self {
            Self::Inserted(model) => Some(model),
            Self::Duplicate => None,
        }
    }
}
