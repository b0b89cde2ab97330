// ABOUTME: Macro extraction from normalized food entries into fixed four-slot vectors
// ABOUTME: Replays nutrients in source order so later duplicates overwrite earlier ones
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

use super::entry::FoodEntry;
use pantry_core::constants::usda::nutrients::{CARBOHYDRATE, ENERGY, PROTEIN, TOTAL_FAT};
use pantry_core::models::Macros;

/// Slot a nutrient name writes to, if it is a tracked macro
#[must_use]
pub fn macro_slot(nutrient_name: &str) -> Option<usize> {
    match nutrient_name {
        PROTEIN => Some(Macros::PROTEIN),
        TOTAL_FAT => Some(Macros::FAT),
        CARBOHYDRATE => Some(Macros::CARBS),
        ENERGY => Some(Macros::ENERGY),
        _ => None,
    }
}

/// Macros of one entry; untracked names and nutrients without a value are skipped
#[must_use]
pub fn entry_macros(entry: &FoodEntry) -> Macros {
    let mut macros = Macros::default();
    for nutrient in entry.nutrients() {
        let (Some(name), Some(value)) = (nutrient.name(), nutrient.value) else {
            continue;
        };
        if let Some(slot) = macro_slot(name) {
            macros.0[slot] = value;
        }
    }
    macros
}

/// One macro vector per entry, positionally aligned with `entries`
#[must_use]
pub fn extract_macros(entries: &[FoodEntry]) -> Vec<Macros> {
    entries.iter().map(entry_macros).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::entry::NutrientEntry;

    fn entry(nutrients: Vec<NutrientEntry>) -> FoodEntry {
        FoodEntry {
            food_nutrients: Some(nutrients),
            ..FoodEntry::default()
        }
    }

    #[test]
    fn test_all_four_slots() {
        let macros = entry_macros(&entry(vec![
            NutrientEntry::new("Energy", "KCAL", 52.0),
            NutrientEntry::new("Carbohydrate, by difference", "G", 13.8),
            NutrientEntry::new("Total lipid (fat)", "G", 0.17),
            NutrientEntry::new("Protein", "G", 0.26),
        ]));
        assert_eq!(macros, Macros::new(0.26, 0.17, 13.8, 52.0));
    }

    #[test]
    fn test_last_write_wins() {
        let macros = entry_macros(&entry(vec![
            NutrientEntry::new("Energy", "KCAL", 52.0),
            NutrientEntry::new("Energy", "KCAL", 52.1),
        ]));
        assert!((macros.energy() - 52.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unset_slots_stay_zero() {
        let macros = entry_macros(&entry(vec![NutrientEntry::new("Protein", "G", 3.0)]));
        assert_eq!(macros, Macros::new(3.0, 0.0, 0.0, 0.0));
        assert_eq!(entry_macros(&FoodEntry::default()), Macros::default());
    }

    #[test]
    fn test_unrenamed_atwater_is_not_a_slot() {
        assert_eq!(macro_slot("Energy (Atwater General Factors)"), None);
        assert_eq!(macro_slot("Energy"), Some(Macros::ENERGY));
    }

    #[test]
    fn test_missing_value_leaves_slot() {
        let mut valueless = NutrientEntry::new("Protein", "G", 0.0);
        valueless.value = None;
        let macros = entry_macros(&entry(vec![NutrientEntry::new("Protein", "G", 4.0), valueless]));
        assert!((macros.protein() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_is_positional() {
        let entries = vec![
            entry(vec![NutrientEntry::new("Protein", "G", 1.0)]),
            FoodEntry::default(),
            entry(vec![NutrientEntry::new("Protein", "G", 3.0)]),
        ];
        let protein: Vec<f64> = extract_macros(&entries).iter().map(Macros::protein).collect();
        assert_eq!(protein, vec![1.0, 0.0, 3.0]);
    }
}
