// ABOUTME: USDA FoodData Central search client returning the raw JSON search response
// ABOUTME: Defines the FoodSearchProvider seam plus a canned-response mock for tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! USDA `FoodData` Central API Client
//!
//! One `GET /foods/search` per call with fixed parameters: the data types are
//! restricted to Foundation and SR Legacy and a single page of 500 results is
//! requested. The response body is handed back untouched; reshaping it is the
//! job of [`crate::pipeline`].
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>
//!
//! # Example
//! ```rust,no_run
//! use pantry_tracker::config::UsdaClientConfig;
//! use pantry_tracker::external::{FoodSearchProvider, UsdaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = UsdaClient::new(UsdaClientConfig::from_env()?)?;
//! let raw = client.search_raw("apple").await?;
//! # Ok(())
//! # }
//! ```

use crate::config::UsdaClientConfig;
use async_trait::async_trait;
use pantry_core::constants::{service_names::USDA_API, usda};
use pantry_core::errors::{AppError, AppResult};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Source of raw food search responses
#[async_trait]
pub trait FoodSearchProvider: Send + Sync {
    /// Run one search and return the response body as JSON
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError`/`ExternalServiceTimeout` coded error
    /// when the request fails, and `InvalidFormat` when the body is not JSON
    async fn search_raw(&self, query: &str) -> AppResult<Value>;
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: Client,
}

impl UsdaClient {
    /// Create a new USDA API client with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: UsdaClientConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn map_send_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            warn!(
                timeout_secs = self.config.request_timeout_secs,
                "USDA search timed out"
            );
            return AppError::fetch_timeout(USDA_API, self.config.request_timeout_secs)
                .with_source(error);
        }
        warn!("USDA search request failed: {error}");
        AppError::fetch_failed(USDA_API, error.to_string()).with_source(error)
    }
}

#[async_trait]
impl FoodSearchProvider for UsdaClient {
    async fn search_raw(&self, query: &str) -> AppResult<Value> {
        let page_size = usda::PAGE_SIZE.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("api_key", self.config.api_key.as_str()),
            ("query", query),
        ];
        params.extend(usda::DATA_TYPES.iter().map(|data_type| ("dataType", *data_type)));
        params.push(("pageSize", page_size.as_str()));

        info!(query, "Searching USDA FoodData Central");
        let response = self
            .http_client
            .get(self.config.search_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "USDA search responded");
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "USDA search returned non-OK status");
            return Err(
                AppError::fetch_failed(USDA_API, format!("HTTP {status}"))
                    .with_details(json!({ "status": status.as_u16(), "body": body })),
            );
        }

        let body: Value = response.json().await?;
        Ok(body)
    }
}

/// How a [`MockUsdaClient`] answers
#[derive(Debug, Clone)]
enum MockOutcome {
    Respond(Value),
    Status(u16),
    Timeout(u64),
}

/// Mock USDA client for testing (no API calls)
pub struct MockUsdaClient {
    outcome: MockOutcome,
    queries: Mutex<Vec<String>>,
}

impl MockUsdaClient {
    /// Mock answering every query with the built-in sample response
    #[must_use]
    pub fn new() -> Self {
        Self::with_response(sample_search_response())
    }

    /// Mock answering every query with `response`
    #[must_use]
    pub fn with_response(response: Value) -> Self {
        Self {
            outcome: MockOutcome::Respond(response),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Mock failing every query with the given HTTP status
    #[must_use]
    pub fn failing_with_status(status: u16) -> Self {
        Self {
            outcome: MockOutcome::Status(status),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Mock failing every query with a timeout
    #[must_use]
    pub fn timing_out(timeout_secs: u64) -> Self {
        Self {
            outcome: MockOutcome::Timeout(timeout_secs),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in call order
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

impl Default for MockUsdaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodSearchProvider for MockUsdaClient {
    async fn search_raw(&self, query: &str) -> AppResult<Value> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_owned());
        }
        match &self.outcome {
            MockOutcome::Respond(response) => Ok(response.clone()),
            MockOutcome::Status(status) => Err(AppError::fetch_failed(
                USDA_API,
                format!("HTTP {status}"),
            )
            .with_details(json!({ "status": status }))),
            MockOutcome::Timeout(secs) => Err(AppError::fetch_timeout(USDA_API, *secs)),
        }
    }
}

/// Canned search response shaped like a real `foods/search` answer
///
/// Covers the awkward cases: an entry reporting energy in kilojoules, one
/// with both energy variants, one without a category, and non-macro
/// nutrients and fields that reduction must drop.
#[must_use]
pub fn sample_search_response() -> Value {
    json!({
        "totalHits": 4,
        "currentPage": 1,
        "totalPages": 1,
        "foodSearchCriteria": { "query": "apple", "pageSize": 500 },
        "foods": [
            {
                "fdcId": 171_688,
                "description": "Apples, raw, with skin (Includes foods for USDA's Food Distribution Program)",
                "dataType": "SR Legacy",
                "publishedDate": "2019-04-01",
                "foodCategory": "Fruits and Fruit Juices",
                "score": 512.3,
                "foodNutrients": [
                    { "nutrientId": 1003, "nutrientName": "Protein", "nutrientNumber": "203", "unitName": "G", "value": 0.26 },
                    { "nutrientId": 1004, "nutrientName": "Total lipid (fat)", "nutrientNumber": "204", "unitName": "G", "value": 0.17 },
                    { "nutrientId": 1005, "nutrientName": "Carbohydrate, by difference", "nutrientNumber": "205", "unitName": "G", "value": 13.8 },
                    { "nutrientId": 1008, "nutrientName": "Energy", "nutrientNumber": "208", "unitName": "KCAL", "value": 52.0 },
                    { "nutrientId": 1062, "nutrientName": "Energy", "nutrientNumber": "268", "unitName": "kJ", "value": 218.0 },
                    { "nutrientId": 1079, "nutrientName": "Fiber, total dietary", "nutrientNumber": "291", "unitName": "G", "value": 2.4 }
                ]
            },
            {
                "fdcId": 1_750_340,
                "description": "Apples, fuji, with skin, raw",
                "dataType": "Foundation",
                "foodCategory": "Fruits and Fruit Juices",
                "foodNutrients": [
                    { "nutrientId": 1003, "nutrientName": "Protein", "unitName": "G", "value": 0.148 },
                    { "nutrientId": 1004, "nutrientName": "Total lipid (fat)", "unitName": "G", "value": 0.162 },
                    { "nutrientId": 1005, "nutrientName": "Carbohydrate, by difference", "unitName": "G", "value": 15.7 },
                    { "nutrientId": 2047, "nutrientName": "Energy (Atwater General Factors)", "unitName": "KCAL", "value": 63.0 },
                    { "nutrientId": 2048, "nutrientName": "Energy (Atwater Specific Factors)", "unitName": "KCAL", "value": 61.3 }
                ]
            },
            {
                "fdcId": 173_933,
                "description": "Babyfood, juice, apple",
                "dataType": "SR Legacy",
                "foodCategory": "Baby Foods",
                "foodNutrients": [
                    { "nutrientId": 1003, "nutrientName": "Protein", "unitName": "G", "value": 0.0 },
                    { "nutrientId": 1062, "nutrientName": "Energy", "unitName": "kJ", "value": 197.0 }
                ]
            },
            {
                "fdcId": 174_158,
                "description": "Apple juice, canned or bottled, unsweetened, without added ascorbic acid",
                "dataType": "SR Legacy",
                "foodNutrients": []
            }
        ]
    })
}
