// ABOUTME: Inventory store persisting the user's food records to a single JSON file
// ABOUTME: Whole-file load, atomic save, delete by position, clear, and display-name lookup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Inventory Store
//!
//! The inventory file is the system of record: a JSON array of
//! `{name, id, macros, date, quantity}` objects, always rewritten whole.
//! Saves go through a temporary file in the same directory that is renamed
//! over the target, so a later load never sees a partial write.
//!
//! Loading is forgiving: a missing, unreadable or corrupt file is treated as
//! an empty inventory and replaced by an empty one.

use crate::config::InventoryConfig;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{FoodRecord, Inventory};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// File-backed inventory
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the configured inventory file
    #[must_use]
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::new(config.path.clone())
    }

    /// Path of the inventory file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the inventory
    ///
    /// Never fails: when the file is missing or cannot be parsed an empty
    /// inventory is returned and an empty file is written in its place.
    #[must_use]
    pub fn load(&self) -> Inventory {
        match self.read() {
            Ok(inventory) => {
                debug!(path = %self.path.display(), records = inventory.len(), "Inventory loaded");
                inventory
            }
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    "Inventory not readable ({error}); starting with an empty inventory"
                );
                match self.write(&[]) {
                    Ok(()) => info!(path = %self.path.display(), "Inventory file created"),
                    Err(write_error) => warn!(
                        path = %self.path.display(),
                        "Could not create inventory file: {write_error}"
                    ),
                }
                Inventory::new()
            }
        }
    }

    /// Replace the stored inventory with `inventory`
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the file cannot be written, or a
    /// `SerializationError` if a record cannot be encoded
    pub fn save(&self, inventory: &[FoodRecord]) -> AppResult<()> {
        self.write(inventory)?;
        info!(path = %self.path.display(), records = inventory.len(), "Inventory saved");
        Ok(())
    }

    /// Remove the record at `index` and save
    ///
    /// Only positions `1..len` are removable; position 0 and out-of-range
    /// positions leave the file untouched and return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the updated inventory cannot be written
    pub fn delete(&self, index: usize) -> AppResult<bool> {
        let mut inventory = self.load();
        if 0 < index && index < inventory.len() {
            let removed = inventory.remove(index);
            self.save(&inventory)?;
            info!(index, name = removed.name(), "Removed inventory record");
            Ok(true)
        } else {
            warn!(index, records = inventory.len(), "Delete position outside removable range");
            Ok(false)
        }
    }

    /// Overwrite the inventory with an empty list
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the file cannot be written
    pub fn clear(&self) -> AppResult<()> {
        self.write(&[])?;
        info!(path = %self.path.display(), "Inventory cleared");
        Ok(())
    }

    /// Load, apply `change`, save, and hand back whatever `change` returned
    ///
    /// # Errors
    ///
    /// Returns an error if `change` fails or the result cannot be written;
    /// nothing is saved when `change` fails
    pub fn update<T, F>(&self, change: F) -> AppResult<T>
    where
        F: FnOnce(&mut Inventory) -> AppResult<T>,
    {
        let mut inventory = self.load();
        let outcome = change(&mut inventory)?;
        self.save(&inventory)?;
        Ok(outcome)
    }

    fn read(&self) -> AppResult<Inventory> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;
        let inventory = serde_json::from_str(&contents)?;
        Ok(inventory)
    }

    fn write(&self, inventory: &[FoodRecord]) -> AppResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| self.storage_error(e))?;

        let temp = NamedTempFile::new_in(dir).map_err(|e| self.storage_error(e))?;
        let mut writer = BufWriter::new(temp);
        serde_json::to_writer(&mut writer, inventory)?;
        let temp = writer
            .into_inner()
            .map_err(|e| self.storage_error(e.into_error()))?;
        temp.as_file().sync_all().map_err(|e| self.storage_error(e))?;
        temp.persist(&self.path)
            .map_err(|e| self.storage_error(e.error))?;
        Ok(())
    }

    fn storage_error(&self, error: std::io::Error) -> AppError {
        AppError::from(error).with_resource_id(self.path.display().to_string())
    }
}

/// Whether any record's display name is exactly `display_name`
///
/// Compares against [`FoodRecord::display_name`], padding included.
#[must_use]
pub fn food_exists(inventory: &[FoodRecord], display_name: &str) -> bool {
    inventory
        .iter()
        .any(|record| record.display_name() == display_name)
}

/// Position of the first record whose display name is exactly `display_name`
#[must_use]
pub fn position_of(inventory: &[FoodRecord], display_name: &str) -> Option<usize> {
    inventory
        .iter()
        .position(|record| record.display_name() == display_name)
}
