// ABOUTME: Configuration management module for the USDA client and inventory storage
// ABOUTME: Re-exports environment-driven configuration types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Configuration module
//!
//! All configuration is read from environment variables, with CLI flags
//! taking precedence where the binary offers one.

/// Environment-driven configuration
pub mod environment;

pub use environment::{InventoryConfig, UsdaClientConfig};
