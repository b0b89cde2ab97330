// ABOUTME: Core data models shared by the search pipeline and the inventory store
// ABOUTME: FoodRecord, the fixed-order Macros vector, and the Inventory alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Food record with macros, quantity, and expiration date
pub mod food_record;

pub use food_record::{FoodRecord, Inventory, Macros};
