// ABOUTME: USDA FoodData Central search endpoint, fixed query parameters, and field allow-lists
// ABOUTME: Field and nutrient names match the JSON keys returned by the foods/search endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Default base URL for the `FoodData` Central API
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
/// Search path appended to the base URL
pub const SEARCH_PATH: &str = "/foods/search";
/// Results requested per search (single page, no pagination)
pub const PAGE_SIZE: u32 = 500;
/// Data types the search is restricted to
pub const DATA_TYPES: [&str; 2] = ["Foundation", "SR Legacy"];

/// Default whole-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default TCP connect timeout
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Top-level container holding the food entries in a search response
pub const FOODS_KEY: &str = "foods";

/// Food entry field names
pub mod fields {
    /// Free-text description, becomes the record name
    pub const DESCRIPTION: &str = "description";
    /// `FoodData` Central identifier, becomes the record id
    pub const FDC_ID: &str = "fdcId";
    /// Data type ("Foundation", "SR Legacy", ...)
    pub const DATA_TYPE: &str = "dataType";
    /// Nested nutrient list
    pub const FOOD_NUTRIENTS: &str = "foodNutrients";
    /// Food category name
    pub const FOOD_CATEGORY: &str = "foodCategory";

    /// Keys kept on every food entry
    pub const FOOD_KEYS: [&str; 5] = [DESCRIPTION, FDC_ID, DATA_TYPE, FOOD_NUTRIENTS, FOOD_CATEGORY];
}

/// Nutrient entry field names
pub mod nutrient_fields {
    /// Numeric nutrient identifier
    pub const NUTRIENT_ID: &str = "nutrientId";
    /// Nutrient name, matched against [`super::nutrients::MACRO_NAMES`]
    pub const NUTRIENT_NAME: &str = "nutrientName";
    /// Unit of `value` ("G", "KCAL", "kJ", ...)
    pub const UNIT_NAME: &str = "unitName";
    /// Amount per 100 g
    pub const VALUE: &str = "value";

    /// Keys kept on every nutrient entry
    pub const NUTRIENT_KEYS: [&str; 4] = [NUTRIENT_ID, NUTRIENT_NAME, UNIT_NAME, VALUE];
}

/// Nutrient names tracked as macros
pub mod nutrients {
    /// Protein, grams
    pub const PROTEIN: &str = "Protein";
    /// Fat, grams
    pub const TOTAL_FAT: &str = "Total lipid (fat)";
    /// Carbohydrates, grams
    pub const CARBOHYDRATE: &str = "Carbohydrate, by difference";
    /// Energy, kilocalories or kilojoules
    pub const ENERGY: &str = "Energy";
    /// Energy variant reported by Foundation foods, folded into [`ENERGY`]
    pub const ENERGY_ATWATER_GENERAL: &str = "Energy (Atwater General Factors)";

    /// Nutrients that survive response reduction
    pub const MACRO_NAMES: [&str; 5] = [
        PROTEIN,
        TOTAL_FAT,
        CARBOHYDRATE,
        ENERGY,
        ENERGY_ATWATER_GENERAL,
    ];
}
