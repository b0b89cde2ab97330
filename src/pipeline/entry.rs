// ABOUTME: Reduced food and nutrient entries produced by allow-list filtering of a search response
// ABOUTME: Every field is optional because reduction omits missing keys instead of defaulting them
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

use serde::{Deserialize, Serialize};

/// One food from a search response after reduction
///
/// Serializes back to the USDA key names with absent fields left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `FoodData` Central identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<i64>,
    /// Data type ("Foundation", "SR Legacy")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Surviving macro nutrients in source order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_nutrients: Option<Vec<NutrientEntry>>,
    /// Food category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_category: Option<String>,
}

impl FoodEntry {
    /// Nutrients in source order; empty when the entry had no nutrient list
    #[must_use]
    pub fn nutrients(&self) -> &[NutrientEntry] {
        self.food_nutrients.as_deref().unwrap_or_default()
    }

    /// Mutable view of the nutrients in source order
    pub fn nutrients_mut(&mut self) -> impl Iterator<Item = &mut NutrientEntry> + '_ {
        self.food_nutrients.iter_mut().flatten()
    }
}

/// One nutrient of a [`FoodEntry`] after reduction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientEntry {
    /// Numeric nutrient identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_id: Option<i64>,
    /// Nutrient name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_name: Option<String>,
    /// Unit of `value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Amount per 100 g
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl NutrientEntry {
    /// Nutrient with a name, unit and value, as found in real responses
    pub fn new(name: impl Into<String>, unit: impl Into<String>, value: f64) -> Self {
        Self {
            nutrient_id: None,
            nutrient_name: Some(name.into()),
            unit_name: Some(unit.into()),
            value: Some(value),
        }
    }

    /// Name, if present
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.nutrient_name.as_deref()
    }

    /// Unit, if present
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit_name.as_deref()
    }
}
