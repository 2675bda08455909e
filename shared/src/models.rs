//! Core domain model for the meal kiosk
//!
//! These types are plain data: the food catalog is immutable reference data
//! loaded once at startup, a `UserProfile` is built fresh per request from
//! form input, and derived values (`EnergyTargets`, `MealPlan`) are
//! recomputed on every generate action rather than mutated in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Food Catalog Types
// ============================================================================

/// Category a food item belongs to within a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Protein source (meat, fish, tofu, eggs)
    Protein,
    /// Starch/grain component (rice, bread, oats)
    Grain,
    /// Vegetable or fruit
    Vegetable,
    /// Fat or nut top-up item
    FatNut,
    Snack,
    Drink,
}

impl FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "protein" => Ok(FoodCategory::Protein),
            "grain" | "starch" => Ok(FoodCategory::Grain),
            "vegetable" | "fruit" => Ok(FoodCategory::Vegetable),
            "fat_nut" | "fat/nut" | "fat" | "nut" => Ok(FoodCategory::FatNut),
            "snack" => Ok(FoodCategory::Snack),
            "drink" => Ok(FoodCategory::Drink),
            other => Err(format!("Unknown food category: {}", other)),
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Grain => "grain",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::FatNut => "fat_nut",
            FoodCategory::Snack => "snack",
            FoodCategory::Drink => "drink",
        };
        f.write_str(s)
    }
}

/// A single entry in the food catalog
///
/// Nutrition values are per serving. Allergen and diet tags are typed set
/// members, never substrings of the name: substring filtering both over-
/// and under-matches, so eligibility is exact tag membership throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub category: FoodCategory,
    /// kcal per serving
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    /// Allergenic ingredient classes (e.g. "peanut", "dairy")
    #[serde(default)]
    pub allergen_tags: BTreeSet<String>,
    /// Dietary suitability labels (e.g. "vegan", "halal")
    #[serde(default)]
    pub diet_tags: BTreeSet<String>,
}

// ============================================================================
// User Profile Types
// ============================================================================

/// Biological sex, used only for the BMR formula branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Low,
    /// Regular light-to-moderate exercise
    #[default]
    Moderate,
    /// Hard daily exercise or a physical job
    High,
}

/// What the user wants out of the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Gain,
    #[default]
    Maintain,
    /// Cut while keeping protein high
    Lean,
    /// Build muscle with a small surplus
    Muscle,
}

/// Food preferences used to filter the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// Keyword the user likes; item names containing it are preferred
    #[serde(default)]
    pub liked_keyword: Option<String>,
    /// Allergen tags to exclude outright
    #[serde(default)]
    pub allergy_keywords: BTreeSet<String>,
    /// Diet tags an item must carry to be eligible (e.g. "halal", "vegan")
    #[serde(default)]
    pub restricted_diet_tags: BTreeSet<String>,
}

/// Body metrics and preferences collected from the kiosk form
///
/// Created fresh per session; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub age_years: i32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub preferences: Preferences,
}

// ============================================================================
// Derived Types
// ============================================================================

/// Daily energy and macronutrient targets derived from a profile
///
/// No independent identity: recomputed whenever the profile changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyTargets {
    pub bmr_kcal: f64,
    pub tdee_kcal: f64,
    pub daily_kcal_target: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Which meal of the day a set of items belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        };
        f.write_str(s)
    }
}

/// Running nutrition totals for a meal or a whole day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MealTotals {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MealTotals {
    /// Sum nutrition over a list of items
    pub fn from_items(items: &[FoodItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            acc.kcal += item.calories;
            acc.protein_g += item.protein_g;
            acc.carbs_g += item.carbs_g;
            acc.fat_g += item.fat_g;
            acc
        })
    }

    /// Accumulate another totals block into this one
    pub fn add(&mut self, other: &MealTotals) {
        self.kcal += other.kcal;
        self.protein_g += other.protein_g;
        self.carbs_g += other.carbs_g;
        self.fat_g += other.fat_g;
    }
}

/// One assembled meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub items: Vec<FoodItem>,
    pub totals: MealTotals,
}

/// A full day's plan: ordered meals plus day totals
///
/// A new plan replaces the old one on each generate action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub meals: Vec<Meal>,
    pub totals: MealTotals,
}
