// ABOUTME: Food category filter applied to reduced search results
// ABOUTME: The "All Categories" sentinel disables filtering; otherwise categories must match exactly
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

use super::entry::FoodEntry;
use pantry_core::constants::categories::ALL_CATEGORIES;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which foods a search keeps, by category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep everything
    #[default]
    All,
    /// Keep only foods whose category equals this name
    Only(String),
}

impl CategoryFilter {
    /// Parse a category name, mapping the "All Categories" sentinel to [`CategoryFilter::All`]
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(name.to_owned())
        }
    }

    /// Category name, or the sentinel for [`CategoryFilter::All`]
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(name) => name,
        }
    }

    /// Whether `entry` passes the filter; entries without a category never match a specific one
    #[must_use]
    pub fn matches(&self, entry: &FoodEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => entry.food_category.as_deref() == Some(name.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keep entries matching `filter`, preserving their relative order
#[must_use]
pub fn filter_by_category(entries: Vec<FoodEntry>, filter: &CategoryFilter) -> Vec<FoodEntry> {
    match filter {
        CategoryFilter::All => entries,
        CategoryFilter::Only(_) => entries
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect(),
    }
}
