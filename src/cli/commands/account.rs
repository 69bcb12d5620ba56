//! Account command handlers

use crate::config::Config;
use crate::db::{NewAccount, Store};

pub async fn cmd_account_add(
    config: &Config,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: Option<&str>,
    subscription_date: Option<&str>,
) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    let subscription_date = subscription_date.map_or_else(
        || chrono::Local::now().format("%Y-%m-%d").to_string(),
        str::to_string,
    );

    let outcome = store
        .add_account(NewAccount {
            email: email.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.map(str::to_string),
            subscription_date: Some(subscription_date),
        })
        .await?;

    match outcome.inserted() {
        Some(account) => println!("✓ Account {} created for {}", account.id, account.email),
        None => println!("An account with email '{email}' already exists."),
    }

    Ok(())
}
