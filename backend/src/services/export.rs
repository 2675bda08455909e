//! Plan export service
//!
//! Wraps a generated plan as a self-contained download document. The export
//! is a direct structural dump of the plan entities with a version marker
//! and timestamp; there is no binary format and no schema migration story.

use chrono::{DateTime, Utc};
use meal_kiosk_shared::models::{EnergyTargets, Meal, MealTotals};
use meal_kiosk_shared::types::PlanResponse;
use serde::{Deserialize, Serialize};

/// Export document version
pub const EXPORT_VERSION: &str = "1.0";

/// Downloadable plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    pub export_version: String,
    pub exported_at: DateTime<Utc>,
    pub targets: EnergyTargets,
    pub meals: Vec<Meal>,
    pub totals: MealTotals,
}

impl PlanExport {
    /// Build an export document from a generated plan
    pub fn from_response(response: PlanResponse) -> Self {
        Self {
            export_version: EXPORT_VERSION.to_string(),
            exported_at: Utc::now(),
            targets: response.targets,
            meals: response.meals,
            totals: response.totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meal_kiosk_shared::models::MealSlot;

    fn response() -> PlanResponse {
        PlanResponse {
            targets: EnergyTargets {
                bmr_kcal: 1567.5,
                tdee_kcal: 2429.6,
                daily_kcal_target: 2429.6,
                protein_g: 78.0,
                carbs_g: 264.0,
                fat_g: 59.0,
            },
            meals: vec![Meal {
                slot: MealSlot::Breakfast,
                items: vec![],
                totals: MealTotals::default(),
            }],
            totals: MealTotals::default(),
            warnings: vec![],
        }
    }

    #[test]
    fn test_export_carries_version_and_plan() {
        let export = PlanExport::from_response(response());
        assert_eq!(export.export_version, EXPORT_VERSION);
        assert_eq!(export.meals.len(), 1);
    }

    #[test]
    fn test_export_serializes_structurally() {
        let export = PlanExport::from_response(response());
        let json = serde_json::to_value(&export).unwrap();
        assert!(json.get("targets").is_some());
        assert!(json.get("meals").is_some());
        assert!(json.get("totals").is_some());
        assert_eq!(json["export_version"], "1.0");
    }
}
