//! Command-line interface for Holonet.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};

pub use commands::{cmd_account_add, cmd_init, cmd_list, cmd_planet_add, cmd_starship_add};

/// Holonet - Star Wars catalog and favorites API
#[derive(Parser)]
#[command(name = "holonet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API (default)
    Serve,

    /// Create default config file
    Init,

    /// Manage accounts
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },

    /// Manage planets
    Planet {
        #[command(subcommand)]
        command: PlanetCommands,
    },

    /// Manage starships
    Starship {
        #[command(subcommand)]
        command: StarshipCommands,
    },

    /// List stored records
    #[command(alias = "ls")]
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create an account
    Add {
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: Option<String>,
        /// Defaults to today
        #[arg(long)]
        subscription_date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PlanetCommands {
    /// Add a planet to the catalog
    Add {
        name: String,
        #[arg(long)]
        climate: Option<String>,
        #[arg(long)]
        population: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum StarshipCommands {
    /// Add a starship to the catalog
    Add {
        name: String,
        #[arg(long)]
        passengers: Option<i64>,
        #[arg(long)]
        length: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Accounts,
    Characters,
    Planets,
    Starships,
}
