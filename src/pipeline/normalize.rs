// ABOUTME: Energy unit normalization for reduced food entries
// ABOUTME: Folds the Atwater energy variant into Energy and converts kilojoules to kilocalories
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

use super::entry::FoodEntry;
use pantry_core::constants::units::{KILOCALORIE, KILOJOULE, KJ_PER_KCAL};
use pantry_core::constants::usda::nutrients::{ENERGY, ENERGY_ATWATER_GENERAL};

/// Convert kilojoules to kilocalories, rounded to one decimal place
#[must_use]
pub fn kilojoules_to_kilocalories(kilojoules: f64) -> f64 {
    (kilojoules / KJ_PER_KCAL * 10.0).round() / 10.0
}

/// Rename `Energy (Atwater General Factors)` to `Energy` and express every
/// kilojoule value in kilocalories
///
/// Values already in kilocalories are left alone. After the rename both
/// energy variants feed the same macro slot, so whichever comes last in the
/// nutrient list wins.
#[must_use]
pub fn normalize_energy(mut entries: Vec<FoodEntry>) -> Vec<FoodEntry> {
    for nutrient in entries.iter_mut().flat_map(FoodEntry::nutrients_mut) {
        if nutrient.name() == Some(ENERGY_ATWATER_GENERAL) {
            nutrient.nutrient_name = Some(ENERGY.to_owned());
        }
        if nutrient.unit() == Some(KILOJOULE) {
            nutrient.value = nutrient.value.map(kilojoules_to_kilocalories);
            nutrient.unit_name = Some(KILOCALORIE.to_owned());
        }
    }
    entries
}
