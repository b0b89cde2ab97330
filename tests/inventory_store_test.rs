// ABOUTME: Integration tests for the file-backed inventory store
// ABOUTME: Round-trips, bootstrap of missing or corrupt files, delete window, and clear
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_tracker::errors::ErrorCode;
use pantry_tracker::models::{FoodRecord, Macros};
use pantry_tracker::store::{food_exists, InventoryStore};
use std::fs;

mod common;

// ============================================================================
// Load / Save
// ============================================================================

#[test]
fn test_save_then_load_round_trips() {
    let (_dir, store) = common::temp_store();
    let inventory = common::sample_inventory();

    store.save(&inventory).unwrap();

    assert_eq!(store.load(), inventory);
}

#[test]
fn test_duplicates_are_kept_in_order() {
    let (_dir, store) = common::temp_store();
    let egg = common::sample_inventory().remove(0);
    let inventory = vec![egg.clone(), egg.clone(), egg];

    store.save(&inventory).unwrap();

    assert_eq!(store.load(), inventory);
}

#[test]
fn test_file_format() {
    let (_dir, store) = common::temp_store();
    store
        .save(&[FoodRecord::with_details(
            "Egg, whole",
            171_287,
            Macros::new(12.6, 9.5, 0.7, 143.0),
            "2026-11-01",
            2,
        )])
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!([{
            "name": "Egg, whole",
            "id": 171_287,
            "macros": [12.6, 9.5, 0.7, 143.0],
            "date": "2026-11-01",
            "quantity": 2
        }])
    );
}

#[test]
fn test_reads_files_written_with_integer_macros() {
    let (_dir, store) = common::temp_store();
    fs::write(
        store.path(),
        r#"[{"name": "Water, tap", "id": 174158, "macros": [0, 0, 0, 0], "date": "", "quantity": 3}]"#,
    )
    .unwrap();

    let inventory = store.load();
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].macros(), Macros::default());
    assert_eq!(inventory[0].quantity(), 3);
}

#[test]
fn test_save_leaves_no_temporary_files() {
    let (dir, store) = common::temp_store();
    store.save(&common::sample_inventory()).unwrap();
    store.save(&[]).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("inventory.json")]);
}

// ============================================================================
// Bootstrap
// ============================================================================

#[test]
fn test_missing_file_bootstraps_empty_inventory() {
    let (_dir, store) = common::temp_store();
    assert!(!store.path().exists());

    assert!(store.load().is_empty());
    assert!(store.path().exists());
    // second load reads the bootstrapped file
    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_file_bootstraps_empty_inventory() {
    let (_dir, store) = common::temp_store();
    fs::write(store.path(), "{ not json").unwrap();

    assert!(store.load().is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
}

#[test]
fn test_zero_byte_file_bootstraps_empty_inventory() {
    let (_dir, store) = common::temp_store();
    fs::write(store.path(), "").unwrap();

    assert!(store.load().is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
}

#[test]
fn test_missing_parent_directory_is_created() {
    let (dir, _) = common::temp_store();
    let store = InventoryStore::new(dir.path().join("nested").join("inventory.json"));

    store.save(&common::sample_inventory()).unwrap();
    assert_eq!(store.load().len(), 3);
}

#[test]
fn test_save_failure_propagates() {
    let (dir, _) = common::temp_store();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();
    let store = InventoryStore::new(blocker.join("inventory.json"));

    let error = store.save(&common::sample_inventory()).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_delete_position_zero_is_a_no_op() {
    let (_dir, store) = common::temp_store();
    let inventory = common::sample_inventory();
    store.save(&inventory).unwrap();

    assert!(!store.delete(0).unwrap());
    assert_eq!(store.load(), inventory);
}

#[test]
fn test_delete_out_of_range_is_a_no_op() {
    let (_dir, store) = common::temp_store();
    let inventory = common::sample_inventory();
    store.save(&inventory).unwrap();

    assert!(!store.delete(3).unwrap());
    assert!(!store.delete(usize::MAX).unwrap());
    assert_eq!(store.load(), inventory);
}

#[test]
fn test_delete_middle_and_last() {
    let (_dir, store) = common::temp_store();
    let inventory = common::sample_inventory();
    store.save(&inventory).unwrap();

    assert!(store.delete(1).unwrap());
    assert_eq!(store.load(), vec![inventory[0].clone(), inventory[2].clone()]);

    assert!(store.delete(1).unwrap());
    assert_eq!(store.load(), vec![inventory[0].clone()]);

    // only position 0 is left, which is never removable
    assert!(!store.delete(0).unwrap());
    assert_eq!(store.load().len(), 1);
}

// ============================================================================
// Clear / Exists
// ============================================================================

#[test]
fn test_clear_is_idempotent() {
    let (_dir, store) = common::temp_store();
    store.save(&common::sample_inventory()).unwrap();

    store.clear().unwrap();
    assert!(store.load().is_empty());
    let once = fs::read_to_string(store.path()).unwrap();

    store.clear().unwrap();
    assert!(store.load().is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), once);
}

#[test]
fn test_food_exists_matches_padded_display_name() {
    let inventory = common::sample_inventory();
    let milk_display = inventory[2].display_name();

    assert_eq!(milk_display.trim_end(), "Milk, whole, 3.25% milkfat...");
    assert!(food_exists(&inventory, &milk_display));
    assert!(!food_exists(&inventory, milk_display.trim_end()));
    assert!(!food_exists(&[], &milk_display));
}
