// ABOUTME: Output formatting helpers for pantry-cli
// ABOUTME: Fixed-width listings for search results and the inventory, plus error reporting

use pantry_tracker::{errors::AppError, models::FoodRecord};

const GAP: &str = "          ";

/// Search results, one preview line each, prefixed by their pick position
pub fn print_search_results(results: &[FoodRecord]) {
    if results.is_empty() {
        println!("No foods matched.");
        return;
    }
    println!("{:>4}  {:<40}{:>4}", "#", "Food", "kcal");
    println!("{}", "=".repeat(50));
    for (position, record) in results.iter().enumerate() {
        println!("{position:>4}  {}", record.preview());
    }
}

/// Inventory listing in the plain record form
pub fn print_inventory(inventory: &[FoodRecord]) {
    if inventory.is_empty() {
        println!("Inventory is empty.");
        return;
    }
    println!("{:>4}  {:<40}{:>4}{GAP}{}{GAP}{}", "#", "Food", "kcal", "Qty", "Expires");
    println!("{}", "=".repeat(80));
    for (position, record) in inventory.iter().enumerate() {
        println!("{position:>4}  {record}");
    }
}

/// Every field of one record
pub fn print_record_details(position: usize, record: &FoodRecord) {
    let macros = record.macros();
    println!("Record #{position}");
    println!("{}", "=".repeat(50));
    println!("   Name:     {}", record.name());
    println!("   FDC ID:   {}", record.id());
    println!("   Protein:  {} g", macros.protein());
    println!("   Fat:      {} g", macros.fat());
    println!("   Carbs:    {} g", macros.carbs());
    println!("   Energy:   {} kcal", macros.energy());
    println!("   Quantity: {}", record.quantity());
    let date = if record.date().is_empty() {
        "(not set)"
    } else {
        record.date()
    };
    println!("   Expires:  {date}");
}

/// Report a failed command on stderr
///
/// Failed searches are called out separately so they are never mistaken for
/// a search that found nothing.
pub fn print_error(error: &AppError) {
    if error.code.is_fetch_failure() {
        eprintln!("Search failed, no results were retrieved: {error}");
    } else {
        eprintln!("Error: {error}");
    }
}
