// ABOUTME: USDA food categories offered for search filtering
// ABOUTME: Includes the "All Categories" sentinel that disables the category filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Sentinel meaning "do not filter by category"
pub const ALL_CATEGORIES: &str = "All Categories";

/// Every category the Foundation and SR Legacy data sets use, sentinel first
pub const FOOD_CATEGORIES: [&str; 19] = [
    ALL_CATEGORIES,
    "Baked Products",
    "Beef Products",
    "Beverages",
    "Cereal Grains and Pasta",
    "Dairy and Egg products",
    "Fats and Oils",
    "Finfish and Shellfish Products",
    "Fruits and Fruit Juices",
    "Legumes and Legume products",
    "Nut and Seed Products",
    "Pork Products",
    "Poultry Products",
    "Restaurant Foods",
    "Sausages and Luncheon Meats",
    "Soups, Sauces, and Gravies",
    "Spices and Herbs",
    "Sweets",
    "Vegetables and Vegetable Products",
];

/// Whether `name` is one of the known categories (sentinel included)
#[must_use]
pub fn is_known_category(name: &str) -> bool {
    FOOD_CATEGORIES.contains(&name)
}
