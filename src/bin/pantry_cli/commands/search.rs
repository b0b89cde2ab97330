// ABOUTME: Search-backed commands for pantry-cli
// ABOUTME: Runs the USDA pipeline, prints previews, and adds picked results to the inventory

use crate::helpers::display;
use pantry_tracker::{
    config::UsdaClientConfig,
    constants::categories::{is_known_category, FOOD_CATEGORIES},
    errors::{AppError, AppResult},
    external::UsdaClient,
    models::FoodRecord,
    pipeline::{search_foods, CategoryFilter},
    store::{position_of, InventoryStore},
};
use tracing::warn;

async fn run_search(
    api_key: Option<String>,
    query: &str,
    category: &CategoryFilter,
) -> AppResult<Vec<FoodRecord>> {
    if !is_known_category(category.name()) {
        warn!(category = %category, "Category is not one of the known USDA categories");
    }
    let client = UsdaClient::new(UsdaClientConfig::resolve(api_key)?)?;
    search_foods(&client, query, category).await
}

/// `search`: print one preview line per result
pub async fn search(
    api_key: Option<String>,
    query: &str,
    category: &CategoryFilter,
) -> AppResult<()> {
    let results = run_search(api_key, query, category).await?;
    display::print_search_results(&results);
    Ok(())
}

/// `categories`: print the known categories
pub fn categories() {
    for category in FOOD_CATEGORIES {
        println!("{category}");
    }
}

/// `add`: search, take result `pick`, and put it into the inventory
///
/// A record with the same display name already in the inventory has its
/// quantity increased instead of a duplicate being appended.
pub async fn add(
    store: &InventoryStore,
    api_key: Option<String>,
    query: &str,
    category: &CategoryFilter,
    pick: usize,
    quantity: i64,
    date: String,
) -> AppResult<()> {
    let results = run_search(api_key, query, category).await?;
    let picked = results.get(pick).ok_or_else(|| {
        AppError::not_found(format!("search result {pick} (of {})", results.len()))
    })?;

    let record = FoodRecord::with_details(
        picked.name(),
        picked.id(),
        picked.macros(),
        date,
        quantity,
    );
    let display_name = record.display_name();

    let (position, merged) = store.update(|inventory| {
        if let Some(position) = position_of(inventory, &display_name) {
            inventory[position].add_quantity(quantity);
            Ok((position, true))
        } else {
            inventory.push(record);
            Ok((inventory.len() - 1, false))
        }
    })?;

    if merged {
        println!(
            "Added {quantity} to existing record #{position}: {}",
            display_name.trim_end()
        );
    } else {
        println!("Added #{position}: {}", display_name.trim_end());
    }
    Ok(())
}
