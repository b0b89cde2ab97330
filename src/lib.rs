// ABOUTME: Main library entry point for the pantry tracker
// ABOUTME: USDA food search pipeline plus a file-backed food inventory
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![deny(unsafe_code)]

//! # Pantry Tracker
//!
//! Searches USDA `FoodData` Central, reduces each hit to protein, fat,
//! carbohydrate and energy, and keeps a user-curated inventory of foods with
//! quantities and expiration dates in a local JSON file.
//!
//! ## Architecture
//!
//! - **external**: HTTP client for the USDA search endpoint behind the
//!   `FoodSearchProvider` trait
//! - **pipeline**: pure stages turning a raw response into `FoodRecord`s
//! - **store**: load/save/delete/clear of the inventory file
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_tracker::config::{InventoryConfig, UsdaClientConfig};
//! use pantry_tracker::external::UsdaClient;
//! use pantry_tracker::pipeline::{search_foods, CategoryFilter};
//! use pantry_tracker::store::InventoryStore;
//!
//! # async fn example() -> pantry_tracker::errors::AppResult<()> {
//! let client = UsdaClient::new(UsdaClientConfig::from_env()?)?;
//! let category = CategoryFilter::from_name("Fruits and Fruit Juices");
//! let foods = search_foods(&client, "apple", &category).await?;
//!
//! let store = InventoryStore::from_config(&InventoryConfig::from_env());
//! let mut inventory = store.load();
//! inventory.extend(foods.into_iter().take(1));
//! store.save(&inventory)?;
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// External API clients (USDA `FoodData` Central)
pub mod external;

/// Structured logging setup
pub mod logging;

/// Search response pipeline
pub mod pipeline;

/// File-backed inventory store
pub mod store;

pub use pantry_core::{constants, errors, models};
