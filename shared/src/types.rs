//! API request and response types

use crate::models::{
    ActivityLevel, EnergyTargets, Goal, Meal, MealTotals, Preferences, Sex, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Plan generation request, one per "generate" press at the kiosk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub age_years: i32,
    pub sex: Sex,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    /// Keyword the user likes; matching item names are preferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked_keyword: Option<String>,
    /// Allergen tags to exclude (e.g. "peanut", "dairy")
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Diet tags an item must carry (e.g. "halal", "vegan")
    #[serde(default)]
    pub diet_restrictions: Vec<String>,
    /// Optional RNG seed; fixing it makes tie-breaks reproducible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl PlanRequest {
    /// Build the domain profile, normalizing tags to lowercase
    pub fn to_profile(&self) -> UserProfile {
        let normalize = |values: &[String]| -> BTreeSet<String> {
            values
                .iter()
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect()
        };

        UserProfile {
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            age_years: self.age_years,
            sex: self.sex,
            activity_level: self.activity_level,
            goal: self.goal,
            preferences: Preferences {
                liked_keyword: self.liked_keyword.clone(),
                allergy_keywords: normalize(&self.allergies),
                restricted_diet_tags: normalize(&self.diet_restrictions),
            },
        }
    }
}

/// Generated plan: targets, meals, day totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub targets: EnergyTargets,
    pub meals: Vec<Meal>,
    pub totals: MealTotals,
    /// Caller-visible signals such as "no matching food" for an empty meal
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
