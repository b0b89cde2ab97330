// ABOUTME: Inventory commands for pantry-cli
// ABOUTME: List, inspect, edit, remove, and clear records in the local inventory file

use crate::helpers::display;
use pantry_tracker::{
    errors::{AppError, AppResult},
    models::{FoodRecord, Inventory},
    store::InventoryStore,
};

fn record_at(inventory: &mut Inventory, index: usize) -> AppResult<&mut FoodRecord> {
    let len = inventory.len();
    inventory
        .get_mut(index)
        .ok_or_else(|| AppError::not_found(format!("inventory position {index} (of {len})")))
}

/// `list`: print the whole inventory
pub fn list(store: &InventoryStore) {
    display::print_inventory(&store.load());
}

/// `show`: print every field of one record
pub fn show(store: &InventoryStore, index: usize) -> AppResult<()> {
    let mut inventory = store.load();
    let record = record_at(&mut inventory, index)?;
    display::print_record_details(index, record);
    Ok(())
}

/// `remove`: delete one record
pub fn remove(store: &InventoryStore, index: usize) -> AppResult<()> {
    if store.delete(index)? {
        println!("Removed inventory record #{index}");
    } else {
        println!("Nothing removed: position {index} is not removable (valid positions start at 1)");
    }
    Ok(())
}

/// `adjust`: add to or take from a record's quantity
pub fn adjust(store: &InventoryStore, index: usize, delta: i64) -> AppResult<()> {
    let quantity = store.update(|inventory| {
        let record = record_at(inventory, index)?;
        record.add_quantity(delta);
        Ok(record.quantity())
    })?;
    println!("Record #{index} quantity is now {quantity}");
    Ok(())
}

/// `set-date`: replace a record's expiration date
pub fn set_date(store: &InventoryStore, index: usize, date: String) -> AppResult<()> {
    store.update(|inventory| {
        record_at(inventory, index)?.set_date(date);
        Ok(())
    })?;
    println!("Record #{index} expiration date updated");
    Ok(())
}

/// `rename`: replace a record's name
pub fn rename(store: &InventoryStore, index: usize, name: String) -> AppResult<()> {
    let display_name = store.update(|inventory| {
        let record = record_at(inventory, index)?;
        record.set_name(name);
        Ok(record.display_name())
    })?;
    println!("Record #{index} renamed to {}", display_name.trim_end());
    Ok(())
}

/// `clear`: empty the inventory
pub fn clear(store: &InventoryStore) -> AppResult<()> {
    store.clear()?;
    println!("Inventory cleared");
    Ok(())
}
