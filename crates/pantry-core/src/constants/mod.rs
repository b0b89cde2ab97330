// ABOUTME: Constants module with domain-separated organization
// ABOUTME: USDA search parameters, field allow-lists, categories, and display widths
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// USDA `FoodData` Central categories
pub mod categories;
/// USDA `FoodData` Central endpoint, query parameters and field names
pub mod usda;

/// Energy unit names and conversion factors
pub mod units {
    /// Unit name USDA uses for kilojoules
    pub const KILOJOULE: &str = "kJ";
    /// Unit name written after converting to kilocalories
    pub const KILOCALORIE: &str = "KCAL";
    /// Kilojoules per kilocalorie (thermochemical calorie)
    pub const KJ_PER_KCAL: f64 = 4.184;
}

/// Fixed-width text layout for inventory and search listings
pub mod display {
    /// Names at or beyond this many characters are truncated to a word boundary
    pub const NAME_TRUNCATE_AT: usize = 20;
    /// Width the display name is right-padded to
    pub const NAME_COLUMN_WIDTH: usize = 40;
    /// Width the calorie column is right-aligned into
    pub const CALORIES_COLUMN_WIDTH: usize = 3;
    /// Spaces between the calorie, quantity and date columns
    pub const COLUMN_GAP: usize = 10;
    /// Appended to a truncated name
    pub const ELLIPSIS: &str = "...";
}

/// Inventory file defaults
pub mod inventory {
    /// Default inventory file, relative to the working directory
    pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";
    /// Quantity given to a record that has not been counted yet
    pub const DEFAULT_QUANTITY: i64 = 1;
}

/// Service names used in logs and error contexts
pub mod service_names {
    /// USDA `FoodData` Central search API
    pub const USDA_API: &str = "USDA API";
    /// Name reported by the logging setup
    pub const PANTRY_TRACKER: &str = "pantry-tracker";
}
