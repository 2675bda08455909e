//! Food catalog loading
//!
//! The catalog is supplied either by an external CSV (configurable path) or
//! a bundled built-in table. Load failure is never fatal: any problem with
//! the external file is logged and the built-in table is used instead, so
//! the kiosk always has something to serve.
//!
//! CSV columns: name, category, calories, protein_g, carbs_g, fat_g,
//! allergen_tags, diet_tags. Tag columns are `;`-separated lists and may be
//! empty.

mod builtin;

pub use builtin::builtin_catalog;

use crate::config::CatalogConfig;
use meal_kiosk_shared::models::{FoodCategory, FoodItem};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to open catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error("catalog file contained no records")]
    Empty,
}

/// Raw CSV row before category parsing and tag splitting
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    name: String,
    category: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    #[serde(default)]
    allergen_tags: String,
    #[serde(default)]
    diet_tags: String,
}

fn split_tags(raw: &str) -> BTreeSet<String> {
    raw.split(';')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

impl CatalogRecord {
    fn into_item(self) -> Result<FoodItem, CatalogError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::InvalidRecord {
                name: "<unnamed>".to_string(),
                reason: "empty name".to_string(),
            });
        }
        let category: FoodCategory =
            self.category
                .parse()
                .map_err(|reason| CatalogError::InvalidRecord {
                    name: name.clone(),
                    reason,
                })?;
        if self.calories < 0.0 || self.protein_g < 0.0 || self.carbs_g < 0.0 || self.fat_g < 0.0 {
            return Err(CatalogError::InvalidRecord {
                name,
                reason: "negative nutrition value".to_string(),
            });
        }

        Ok(FoodItem {
            name,
            category,
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            allergen_tags: split_tags(&self.allergen_tags),
            diet_tags: split_tags(&self.diet_tags),
        })
    }
}

/// Parse a catalog from any CSV reader
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<FoodItem>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut items = Vec::new();
    for record in csv_reader.deserialize::<CatalogRecord>() {
        items.push(record?.into_item()?);
    }

    if items.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(items)
}

/// Load a catalog from a CSV file on disk
pub fn load_from_path(path: &Path) -> Result<Vec<FoodItem>, CatalogError> {
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Load the catalog per configuration, degrading to the built-in table
///
/// An external path that is missing or malformed is a logged warning, not
/// an error: the caller always gets a usable, non-empty catalog.
pub fn load(config: &CatalogConfig) -> Vec<FoodItem> {
    match &config.path {
        Some(path) => match load_from_path(Path::new(path)) {
            Ok(items) => {
                info!(path = %path, count = items.len(), "Loaded external food catalog");
                items
            }
            Err(err) => {
                warn!(path = %path, error = %err, "Falling back to built-in food catalog");
                builtin_catalog()
            }
        },
        None => {
            let items = builtin_catalog();
            info!(count = items.len(), "Using built-in food catalog");
            items
        }
    }
}
