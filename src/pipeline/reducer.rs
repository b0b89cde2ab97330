// ABOUTME: Allow-list reduction of a raw USDA search response into typed food entries
// ABOUTME: Keeps listed keys that are present and drops nutrients that are not tracked macros
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

use super::entry::FoodEntry;
use pantry_core::constants::usda::{
    fields, nutrient_fields, nutrients, FOODS_KEY,
};
use pantry_core::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use tracing::warn;

/// Copy only the allow-listed keys present in `source`
///
/// Missing keys are left out, never defaulted.
#[must_use]
pub fn retain_fields(source: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|key| {
            source
                .get(*key)
                .map(|value| ((*key).to_owned(), value.clone()))
        })
        .collect()
}

/// Reduce a search response with the standard USDA allow-lists
///
/// # Errors
///
/// See [`reduce_response`]
pub fn reduce_search_response(response: &Value) -> AppResult<Vec<FoodEntry>> {
    reduce_response(
        response,
        &fields::FOOD_KEYS,
        &nutrient_fields::NUTRIENT_KEYS,
        &nutrients::MACRO_NAMES,
    )
}

/// Reduce every food in `response["foods"]` to the allow-listed keys
///
/// Nutrients are reduced to `nutrient_keys` and kept only when their name is in
/// `macro_names`. Food order and surviving nutrient order are preserved, and
/// no well-formed food is dropped, even one left without nutrients. A food
/// that is not a JSON object, holds a non-object nutrient, or has a kept field
/// of the wrong type is skipped with a warning.
///
/// # Errors
///
/// Returns an `InvalidFormat` error if the `foods` array is missing
pub fn reduce_response(
    response: &Value,
    food_keys: &[&str],
    nutrient_keys: &[&str],
    macro_names: &[&str],
) -> AppResult<Vec<FoodEntry>> {
    let foods = response
        .get(FOODS_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::data_shape(format!("search response has no '{FOODS_KEY}' array")))?;

    Ok(foods
        .iter()
        .enumerate()
        .filter_map(|(position, food)| {
            match reduce_food(position, food, food_keys, nutrient_keys, macro_names) {
                Ok(entry) => Some(entry),
                Err(error) => {
                    warn!(position, "Skipping malformed food: {error}");
                    None
                }
            }
        })
        .collect())
}

fn reduce_food(
    position: usize,
    food: &Value,
    food_keys: &[&str],
    nutrient_keys: &[&str],
    macro_names: &[&str],
) -> AppResult<FoodEntry> {
    let object = food
        .as_object()
        .ok_or_else(|| AppError::data_shape(format!("food {position} is not a JSON object")))?;
    let mut reduced = retain_fields(object, food_keys);

    if let Some(nutrient_list) = reduced.get_mut(fields::FOOD_NUTRIENTS) {
        let kept = reduce_nutrients(position, nutrient_list, nutrient_keys, macro_names)?;
        *nutrient_list = Value::Array(kept);
    }

    serde_json::from_value(Value::Object(reduced))
        .map_err(|e| AppError::data_shape(format!("food {position}: {e}")).with_source(e))
}

fn reduce_nutrients(
    position: usize,
    nutrient_list: &Value,
    nutrient_keys: &[&str],
    macro_names: &[&str],
) -> AppResult<Vec<Value>> {
    let nutrient_list = nutrient_list.as_array().ok_or_else(|| {
        AppError::data_shape(format!(
            "food {position}: '{}' is not an array",
            fields::FOOD_NUTRIENTS
        ))
    })?;

    let mut kept = Vec::new();
    for nutrient in nutrient_list {
        let object = nutrient.as_object().ok_or_else(|| {
            AppError::data_shape(format!("food {position}: nutrient is not a JSON object"))
        })?;
        let is_macro = object
            .get(nutrient_fields::NUTRIENT_NAME)
            .and_then(Value::as_str)
            .is_some_and(|name| macro_names.contains(&name));
        if is_macro {
            kept.push(Value::Object(retain_fields(object, nutrient_keys)));
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_retain_fields_omits_missing_keys() {
        let source = json!({ "a": 1, "b": 2, "c": 3 });
        let kept = retain_fields(source.as_object().unwrap(), &["a", "c", "z"]);

        assert_eq!(Value::Object(kept), json!({ "a": 1, "c": 3 }));
    }

    #[test]
    fn test_missing_foods_array_is_data_shape_error() {
        let error = reduce_search_response(&json!({ "totalHits": 0 })).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);

        let error = reduce_search_response(&json!({ "foods": "nope" })).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_non_macro_nutrients_and_fields_dropped() {
        let response = json!({
            "foods": [{
                "fdcId": 1,
                "description": "Oats",
                "score": 99.0,
                "foodNutrients": [
                    { "nutrientName": "Iron, Fe", "unitName": "MG", "value": 4.7 },
                    { "nutrientName": "Protein", "unitName": "G", "value": 16.9, "derivationCode": "A" },
                    { "unitName": "G", "value": 1.0 }
                ]
            }]
        });

        let entries = reduce_search_response(&response).unwrap();
        assert_eq!(entries.len(), 1);
        let value = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "fdcId": 1,
                "description": "Oats",
                "foodNutrients": [
                    { "nutrientName": "Protein", "unitName": "G", "value": 16.9 }
                ]
            })
        );
    }

    #[test]
    fn test_entries_without_nutrients_are_kept() {
        let response = json!({
            "foods": [
                { "fdcId": 1, "description": "A", "foodNutrients": [] },
                { "fdcId": 2, "description": "B" },
                { "fdcId": 3, "description": "C", "foodNutrients": [
                    { "nutrientName": "Caffeine", "unitName": "MG", "value": 40.0 }
                ]}
            ]
        });

        let entries = reduce_search_response(&response).unwrap();
        let ids: Vec<Option<i64>> = entries.iter().map(|e| e.fdc_id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        assert!(entries.iter().all(|e| e.nutrients().is_empty()));
        assert!(entries[1].food_nutrients.is_none());
    }

    #[test]
    fn test_custom_allow_lists() {
        let response = json!({
            "foods": [{
                "fdcId": 7,
                "description": "Kale",
                "foodCategory": "Vegetables and Vegetable Products",
                "foodNutrients": [
                    { "nutrientId": 1003, "nutrientName": "Protein", "unitName": "G", "value": 2.9 },
                    { "nutrientId": 1004, "nutrientName": "Total lipid (fat)", "unitName": "G", "value": 1.5 }
                ]
            }]
        });

        let entries = reduce_response(
            &response,
            &["fdcId", "foodNutrients"],
            &["nutrientName", "value"],
            &["Total lipid (fat)"],
        )
        .unwrap();

        assert_eq!(entries[0].description, None);
        assert_eq!(entries[0].food_category, None);
        let nutrients = entries[0].nutrients();
        assert_eq!(nutrients.len(), 1);
        assert_eq!(nutrients[0].name(), Some("Total lipid (fat)"));
        assert_eq!(nutrients[0].unit(), None);
    }

    #[test]
    fn test_malformed_foods_are_skipped() {
        let response = json!({
            "foods": [
                { "fdcId": "not-a-number", "description": "Bad id" },
                "not an object",
                { "fdcId": 2, "description": "Bad nutrient", "foodNutrients": [42] },
                { "fdcId": 3, "description": "Fine" }
            ]
        });

        let entries = reduce_search_response(&response).unwrap();
        let ids: Vec<Option<i64>> = entries.iter().map(|e| e.fdc_id).collect();
        assert_eq!(ids, vec![Some(3)]);
    }

    #[test]
    fn test_reduce_food_reports_position_of_bad_field() {
        let food = json!({ "fdcId": "not-a-number" });
        let error = reduce_food(
            0,
            &food,
            &fields::FOOD_KEYS,
            &nutrient_fields::NUTRIENT_KEYS,
            &nutrients::MACRO_NAMES,
        )
        .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert!(error.message.contains("food 0"));
    }
}
