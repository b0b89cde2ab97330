// ABOUTME: External API client modules (USDA FoodData Central)
// ABOUTME: Provides the food search provider trait, the HTTP client, and a mock
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! External API Clients

/// USDA `FoodData` Central search client
pub mod usda_client;

// Re-export commonly used types
pub use usda_client::{sample_search_response, FoodSearchProvider, MockUsdaClient, UsdaClient};
