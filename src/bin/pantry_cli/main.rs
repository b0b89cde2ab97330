// ABOUTME: Pantry CLI - search USDA FoodData Central and manage the local food inventory
// ABOUTME: Parses arguments, initializes logging, and dispatches to command handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
//!
//! Usage:
//! ```bash
//! # Search (needs USDA_API_KEY or --api-key)
//! pantry-cli search apple --category "Fruits and Fruit Juices"
//!
//! # Add the third search result with an expiration date
//! pantry-cli add apple --pick 2 --quantity 4 --date 2026-11-02
//!
//! # Inspect and edit the inventory
//! pantry-cli list
//! pantry-cli show 1
//! pantry-cli adjust 1 -- -2
//! pantry-cli set-date 1 2026-11-09
//! pantry-cli remove 1
//! pantry-cli clear
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pantry_tracker::{
    config::InventoryConfig, constants::categories::ALL_CATEGORIES, errors::AppResult,
    logging::LoggingConfig, pipeline::CategoryFilter, store::InventoryStore,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pantry-cli",
    about = "Food inventory backed by USDA FoodData Central",
    long_about = "Search USDA FoodData Central for foods, and keep a local inventory of them with quantities and expiration dates."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Inventory file override (default: $PANTRY_INVENTORY_PATH or ./inventory.json)
    #[arg(long, global = true)]
    inventory: Option<PathBuf>,

    /// USDA API key override (default: $USDA_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search foods and list the results
    Search {
        /// Free-text query, e.g. "cheddar cheese"
        query: String,

        /// Only keep foods from this category
        #[arg(long, short = 'c', default_value = ALL_CATEGORIES)]
        category: CategoryFilter,
    },

    /// List the known food categories
    Categories,

    /// Search foods and add one result to the inventory
    Add {
        /// Free-text query
        query: String,

        /// Position of the result to add, as shown by `search`
        #[arg(long, short = 'p')]
        pick: usize,

        /// Only keep foods from this category
        #[arg(long, short = 'c', default_value = ALL_CATEGORIES)]
        category: CategoryFilter,

        /// How many to add
        #[arg(long, short = 'q', default_value = "1")]
        quantity: i64,

        /// Expiration date (free-form)
        #[arg(long, short = 'd', default_value = "")]
        date: String,
    },

    /// Show the inventory
    List,

    /// Show every field of one inventory record
    Show {
        /// Inventory position
        index: usize,
    },

    /// Remove one inventory record
    Remove {
        /// Inventory position
        index: usize,
    },

    /// Change the quantity of an inventory record
    Adjust {
        /// Inventory position
        index: usize,

        /// Amount to add (negative to take away)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    /// Set the expiration date of an inventory record
    SetDate {
        /// Inventory position
        index: usize,

        /// Expiration date (free-form)
        date: String,
    },

    /// Rename an inventory record
    Rename {
        /// Inventory position
        index: usize,

        /// New name
        name: String,
    },

    /// Remove every inventory record
    Clear,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::display::print_error(&error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let store = InventoryStore::from_config(&InventoryConfig::resolve(cli.inventory));
    debug!(path = %store.path().display(), "Using inventory file");

    match cli.command {
        Command::Search { query, category } => {
            commands::search::search(cli.api_key, &query, &category).await?;
        }
        Command::Categories => commands::search::categories(),
        Command::Add {
            query,
            pick,
            category,
            quantity,
            date,
        } => {
            commands::search::add(
                &store,
                cli.api_key,
                &query,
                &category,
                pick,
                quantity,
                date,
            )
            .await?;
        }
        Command::List => commands::inventory::list(&store),
        Command::Show { index } => commands::inventory::show(&store, index)?,
        Command::Remove { index } => commands::inventory::remove(&store, index)?,
        Command::Adjust { index, delta } => commands::inventory::adjust(&store, index, delta)?,
        Command::SetDate { index, date } => commands::inventory::set_date(&store, index, date)?,
        Command::Rename { index, name } => commands::inventory::rename(&store, index, name)?,
        Command::Clear => commands::inventory::clear(&store)?,
    }

    Ok(())
}
