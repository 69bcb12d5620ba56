use anyhow::{Context, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tokio::task;

use super::InsertOutcome;
use crate::entities::{accounts, prelude::*};

/// Account data returned from repository (without the password hash)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub subscription_date: Option<String>,
}

impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            subscription_date: model.subscription_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub subscription_date: Option<String>,
}

pub struct AccountRepository {
    conn: DatabaseConnection,
}

impl AccountRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<Account>> {
        let rows = Accounts::find()
            .order_by_asc(accounts::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list accounts")?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Account>> {
        let account = Accounts::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query account by ID")?;

        Ok(account.map(Account::from))
    }

    /// Hashes the password off the async runtime, then inserts.
    /// A taken email yields [`InsertOutcome::Duplicate`].
    pub async fn create(&self, account: NewAccount) -> Result<InsertOutcome<Account>> {
        let password = account.password;
        let hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .context("Password hashing task panicked")??;

        let active = accounts::ActiveModel {
            email: Set(account.email),
            password: Set(hash),
            first_name: Set(account.first_name),
            last_name: Set(account.last_name),
            subscription_date: Set(account.subscription_date),
            ..Default::default()
        };

        let outcome = InsertOutcome::from_insert(active.insert(&self.conn).await)
            .context("Failed to insert account")?;

        Ok(match outcome {
            InsertOutcome::Inserted(model) => InsertOutcome::Inserted(Account::from(model)),
            InsertOutcome::Duplicate => InsertOutcome::Duplicate,
        })
    }
}

/// Hash a password using Argon2id with default params.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_salted() {
        let a = hash_password("hunter2").unwrap();
        let b = hash_password("hunter2").unwrap();
        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
        assert!(!a.contains("hunter2"));
    }
}
