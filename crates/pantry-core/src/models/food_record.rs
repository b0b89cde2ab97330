// ABOUTME: FoodRecord model for one nutrition entry with quantity and expiration date
// ABOUTME: Fixed-width display helpers for search previews and inventory listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::display::{
    CALORIES_COLUMN_WIDTH, COLUMN_GAP, ELLIPSIS, NAME_COLUMN_WIDTH, NAME_TRUNCATE_AT,
};
use crate::constants::inventory::DEFAULT_QUANTITY;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of food records, persisted as a whole
pub type Inventory = Vec<FoodRecord>;

/// Macronutrients per 100 g in the fixed order protein, fat, carbs, energy
///
/// Serialized as a bare 4-element JSON array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Macros(pub [f64; 4]);

impl Macros {
    /// Slot index of protein (grams)
    pub const PROTEIN: usize = 0;
    /// Slot index of fat (grams)
    pub const FAT: usize = 1;
    /// Slot index of carbohydrates (grams)
    pub const CARBS: usize = 2;
    /// Slot index of energy (kilocalories)
    pub const ENERGY: usize = 3;

    /// Build from the four values in slot order
    #[must_use]
    pub const fn new(protein_g: f64, fat_g: f64, carbs_g: f64, energy_kcal: f64) -> Self {
        Self([protein_g, fat_g, carbs_g, energy_kcal])
    }

    /// Protein in grams
    #[must_use]
    pub const fn protein(&self) -> f64 {
        self.0[Self::PROTEIN]
    }

    /// Fat in grams
    #[must_use]
    pub const fn fat(&self) -> f64 {
        self.0[Self::FAT]
    }

    /// Carbohydrates in grams
    #[must_use]
    pub const fn carbs(&self) -> f64 {
        self.0[Self::CARBS]
    }

    /// Energy in kilocalories
    #[must_use]
    pub const fn energy(&self) -> f64 {
        self.0[Self::ENERGY]
    }
}

/// One food entry, either fresh from a search or restored from the inventory file
///
/// The serialized keys (`name`, `id`, `macros`, `date`, `quantity`) are the
/// inventory file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    name: String,
    id: i64,
    macros: Macros,
    #[serde(default)]
    date: String,
    #[serde(default = "default_quantity")]
    quantity: i64,
}

const fn default_quantity() -> i64 {
    DEFAULT_QUANTITY
}

impl FoodRecord {
    /// Record with an empty date and a quantity of one
    pub fn new(name: impl Into<String>, id: i64, macros: Macros) -> Self {
        Self {
            name: name.into(),
            id,
            macros,
            date: String::new(),
            quantity: DEFAULT_QUANTITY,
        }
    }

    /// Record with every field given, as read back from storage
    pub fn with_details(
        name: impl Into<String>,
        id: i64,
        macros: Macros,
        date: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            macros,
            date: date.into(),
            quantity,
        }
    }

    /// Raw name as stored
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Source database identifier
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Macro vector
    #[must_use]
    pub const fn macros(&self) -> Macros {
        self.macros
    }

    /// Replace the macro vector
    pub fn set_macros(&mut self, macros: Macros) {
        self.macros = macros;
    }

    /// Free-form expiration date, empty when unset
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Replace the expiration date
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// Current count
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Increase the count by `amount`
    pub fn add_quantity(&mut self, amount: i64) {
        self.quantity += amount;
    }

    /// Decrease the count by `amount`; the count may go negative
    pub fn remove_quantity(&mut self, amount: i64) {
        self.quantity -= amount;
    }

    /// Name shortened for listings and padded to the name column width
    ///
    /// Names of at least 20 characters keep their first 20 characters plus the
    /// rest of the word they cut into, lose a trailing comma, and gain `...`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let shortened = if self.name.chars().count() >= NAME_TRUNCATE_AT {
            let split = self
                .name
                .char_indices()
                .nth(NAME_TRUNCATE_AT)
                .map_or(self.name.len(), |(index, _)| index);
            let (head, tail) = self.name.split_at(split);
            let next_word = tail.split(' ').next().unwrap_or_default();

            let mut shortened = format!("{head}{next_word}");
            if shortened.ends_with(',') {
                shortened.pop();
            }
            shortened.push_str(ELLIPSIS);
            shortened
        } else {
            self.name.clone()
        };

        format!("{shortened:<width$}", width = NAME_COLUMN_WIDTH)
    }

    /// Energy truncated to whole kilocalories, right-aligned in the calorie column
    #[must_use]
    pub fn display_calories(&self) -> String {
        let calories = self.macros.energy() as i64;
        format!("{calories:>width$}", width = CALORIES_COLUMN_WIDTH)
    }

    /// Short listing line used for search results: name, calories, date
    #[must_use]
    pub fn preview(&self) -> String {
        format!(
            "{}{}{}{}",
            self.display_name(),
            self.display_calories(),
            " ".repeat(COLUMN_GAP),
            self.date
        )
    }
}

impl fmt::Display for FoodRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gap = " ".repeat(COLUMN_GAP);
        write!(
            f,
            "{}{}{gap}{}{gap}{}",
            self.display_name(),
            self.display_calories(),
            self.quantity,
            self.date
        )
    }
}
