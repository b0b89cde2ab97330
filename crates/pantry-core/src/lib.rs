// ABOUTME: Core types and constants for the Pantry Tracker food inventory
// ABOUTME: Foundation crate with error handling, USDA constants, and the food record model
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing the shared types used by the search pipeline,
//! the inventory store and the CLI.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: USDA endpoint, field allow-lists, categories, display widths
//! - **models**: `FoodRecord` and its fixed `Macros` vector

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FoodRecord`, `Macros`)
pub mod models;
