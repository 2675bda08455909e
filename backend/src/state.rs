//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state extraction.
//! The food catalog is read-only after load: plan generation runs the whole
//! pipeline synchronously per request with no locking.

use crate::config::AppConfig;
use meal_kiosk_shared::energy::BmrFormula;
use meal_kiosk_shared::models::FoodItem;
use std::sync::Arc;

/// Shared application state
///
/// All fields are Arc-wrapped or Copy, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Immutable food catalog, loaded once at startup
    catalog: Arc<Vec<FoodItem>>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// BMR formula parsed from config at startup
    bmr_formula: BmrFormula,
}

impl AppState {
    /// Create a new application state
    ///
    /// The BMR formula string is parsed once here; an unknown value falls
    /// back to the default rather than failing startup.
    pub fn new(catalog: Vec<FoodItem>, config: AppConfig) -> Self {
        let bmr_formula = config
            .plan
            .bmr_formula
            .parse()
            .unwrap_or_else(|err| {
                tracing::warn!("{}; using default formula", err);
                BmrFormula::default()
            });

        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            bmr_formula,
        }
    }

    /// Get the food catalog
    #[inline]
    pub fn catalog(&self) -> &[FoodItem] {
        &self.catalog
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the configured BMR formula
    #[inline]
    pub fn bmr_formula(&self) -> BmrFormula {
        self.bmr_formula
    }
}
