// ABOUTME: Food search pipeline turning a raw USDA response into FoodRecords
// ABOUTME: Chains reduction, energy normalization, category filtering, and macro extraction
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Food Search Pipeline
//!
//! ```text
//! search_raw ─► reduce ─► normalize energy ─► filter category ─► extract macros ─► FoodRecord
//! ```
//!
//! Every stage is a pure function over an owned `Vec`, so nutrient order
//! (and with it the last-write-wins behaviour of macro extraction) is kept
//! from the response all the way to the records.

/// Category filter stage
pub mod category;
/// Reduced entry types
pub mod entry;
/// Macro extraction stage
pub mod macros;
/// Energy normalization stage
pub mod normalize;
/// Allow-list reduction stage
pub mod reducer;

pub use category::{filter_by_category, CategoryFilter};
pub use entry::{FoodEntry, NutrientEntry};
pub use macros::extract_macros;
pub use normalize::normalize_energy;
pub use reducer::{reduce_response, reduce_search_response};

use crate::external::FoodSearchProvider;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{FoodRecord, Macros};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Pair each entry with its macros and build records
///
/// Entries without a description or an id cannot become a record and are
/// skipped with a warning.
#[must_use]
pub fn build_records(entries: &[FoodEntry], macros: &[Macros]) -> Vec<FoodRecord> {
    entries
        .iter()
        .zip(macros)
        .filter_map(|(entry, macros)| match (&entry.description, entry.fdc_id) {
            (Some(description), Some(fdc_id)) => {
                Some(FoodRecord::new(description.clone(), fdc_id, *macros))
            }
            _ => {
                warn!(
                    fdc_id = ?entry.fdc_id,
                    description = ?entry.description,
                    "Skipping food without description or fdcId"
                );
                None
            }
        })
        .collect()
}

/// Run every pipeline stage over a raw search response
///
/// # Errors
///
/// Returns an `InvalidFormat` error when the response does not have the
/// shape of a USDA search response
pub fn process_response(response: &Value, category: &CategoryFilter) -> AppResult<Vec<FoodRecord>> {
    let entries = reduce_search_response(response)?;
    let reduced = entries.len();

    let entries = normalize_energy(entries);
    let entries = filter_by_category(entries, category);
    debug!(
        reduced,
        kept = entries.len(),
        category = %category,
        "Filtered search results by category"
    );

    let macros = extract_macros(&entries);
    Ok(build_records(&entries, &macros))
}

/// Search for `query` and return the matching foods as records
///
/// An empty `Ok` means the search succeeded and nothing matched; a failed
/// request is always an `Err` with an external-service error code.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank query (no request is made), the
/// provider's error when the request fails, or `InvalidFormat` for an
/// unexpected response shape
pub async fn search_foods<P>(
    provider: &P,
    query: &str,
    category: &CategoryFilter,
) -> AppResult<Vec<FoodRecord>>
where
    P: FoodSearchProvider + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::invalid_input("Search query cannot be empty"));
    }

    let response = provider.search_raw(query).await?;
    let records = process_response(&response, category)?;
    info!(query, category = %category, results = records.len(), "Food search complete");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::sample_search_response;

    #[test]
    fn test_build_records_skips_incomplete_entries() {
        let entries = vec![
            FoodEntry {
                description: Some("Egg, whole".into()),
                fdc_id: Some(171_287),
                ..FoodEntry::default()
            },
            FoodEntry {
                fdc_id: Some(5),
                ..FoodEntry::default()
            },
        ];
        let macros = vec![Macros::new(12.6, 9.5, 0.7, 143.0), Macros::default()];

        let records = build_records(&entries, &macros);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), 171_287);
        assert_eq!(records[0].quantity(), 1);
        assert_eq!(records[0].date(), "");
        assert!((records[0].macros().energy() - 143.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_process_sample_response() {
        let records = process_response(&sample_search_response(), &CategoryFilter::All).unwrap();
        let ids: Vec<i64> = records.iter().map(FoodRecord::id).collect();
        assert_eq!(ids, vec![171_688, 1_750_340, 173_933, 174_158]);

        // 218 kJ listed after 52 kcal: the converted value wins
        assert!((records[0].macros().energy() - 52.1).abs() < f64::EPSILON);
        // Atwater variant renamed into the energy slot
        assert!((records[1].macros().energy() - 63.0).abs() < f64::EPSILON);
        // kilojoule-only entry
        assert!((records[2].macros().energy() - 47.1).abs() < f64::EPSILON);
        assert_eq!(records[3].macros(), Macros::default());
    }

    fn single_food_energy(nutrients: Value) -> f64 {
        let response = serde_json::json!({
            "foods": [{ "fdcId": 1, "description": "Oats", "foodNutrients": nutrients }]
        });
        let records = process_response(&response, &CategoryFilter::All).unwrap();
        records[0].macros().energy()
    }

    #[test]
    fn test_later_energy_variant_wins_either_order() {
        let atwater_then_energy = single_food_energy(serde_json::json!([
            { "nutrientName": "Energy (Atwater General Factors)", "unitName": "KCAL", "value": 63.0 },
            { "nutrientName": "Energy", "unitName": "kJ", "value": 500.0 }
        ]));
        assert!((atwater_then_energy - 119.5).abs() < f64::EPSILON);

        let energy_then_atwater = single_food_energy(serde_json::json!([
            { "nutrientName": "Energy", "unitName": "KCAL", "value": 10.0 },
            { "nutrientName": "Energy (Atwater General Factors)", "unitName": "kJ", "value": 500.0 }
        ]));
        assert!((energy_then_atwater - 119.5).abs() < f64::EPSILON);

        let energy_kj_then_atwater_kcal = single_food_energy(serde_json::json!([
            { "nutrientName": "Energy", "unitName": "kJ", "value": 500.0 },
            { "nutrientName": "Energy (Atwater General Factors)", "unitName": "KCAL", "value": 63.0 }
        ]));
        assert!((energy_kj_then_atwater_kcal - 63.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_food_does_not_fail_search() {
        let response = serde_json::json!({
            "foods": [
                { "fdcId": "171688", "description": "Apples, raw" },
                { "fdcId": 1_750_340, "description": "Apples, fuji, with skin, raw" }
            ]
        });
        let records = process_response(&response, &CategoryFilter::All).unwrap();
        let ids: Vec<i64> = records.iter().map(FoodRecord::id).collect();
        assert_eq!(ids, vec![1_750_340]);
    }
}
