// ABOUTME: Environment configuration for the USDA client and the inventory file location
// ABOUTME: Reads credentials, timeouts, and paths from environment variables with defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Environment-based configuration
//!
//! The USDA API key is never compiled in; it comes from `USDA_API_KEY` or an
//! explicit override supplied by the caller.

use pantry_core::constants::{inventory, usda};
use pantry_core::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the `FoodData` Central API key
pub const API_KEY_VAR: &str = "USDA_API_KEY";
/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "USDA_BASE_URL";
/// Environment variable overriding the whole-request timeout
pub const REQUEST_TIMEOUT_VAR: &str = "USDA_REQUEST_TIMEOUT_SECS";
/// Environment variable overriding the connect timeout
pub const CONNECT_TIMEOUT_VAR: &str = "USDA_CONNECT_TIMEOUT_SECS";
/// Environment variable overriding the inventory file path
pub const INVENTORY_PATH_VAR: &str = "PANTRY_INVENTORY_PATH";

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for USDA API (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: usda::DEFAULT_BASE_URL.to_owned(),
            request_timeout_secs: usda::DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: usda::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl UsdaClientConfig {
    /// Load the client configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if `USDA_API_KEY` is unset or empty, and
    /// `ConfigInvalid` if a timeout is not a positive integer
    pub fn from_env() -> AppResult<Self> {
        Self::resolve(None)
    }

    /// Load from environment, preferring `api_key` when the caller supplies one
    ///
    /// # Errors
    ///
    /// Same as [`UsdaClientConfig::from_env`]
    pub fn resolve(api_key: Option<String>) -> AppResult<Self> {
        let api_key = api_key
            .or_else(|| env::var(API_KEY_VAR).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::config_missing(API_KEY_VAR))?;

        Ok(Self {
            api_key,
            base_url: env_var_or(BASE_URL_VAR, usda::DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            request_timeout_secs: parse_secs(
                REQUEST_TIMEOUT_VAR,
                usda::DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_secs(
                CONNECT_TIMEOUT_VAR,
                usda::DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }

    /// Whole-request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// TCP connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Full URL of the search endpoint
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, usda::SEARCH_PATH)
    }
}

/// Inventory file configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Path of the JSON inventory file
    pub path: PathBuf,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(inventory::DEFAULT_INVENTORY_PATH),
        }
    }
}

impl InventoryConfig {
    /// Load inventory configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(None)
    }

    /// Load from environment, preferring `path` when the caller supplies one
    #[must_use]
    pub fn resolve(path: Option<PathBuf>) -> Self {
        let path = path
            .or_else(|| env::var_os(INVENTORY_PATH_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(inventory::DEFAULT_INVENTORY_PATH));
        Self { path }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_secs(key: &str, default: u64) -> AppResult<u64> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::config_invalid(format!(
            "{key} must be a positive number of seconds, got '{raw}'"
        ))
        .with_resource_id(key)),
    }
}
