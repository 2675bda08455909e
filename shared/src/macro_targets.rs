//! Macronutrient allocation
//!
//! Splits the daily calorie target into protein/carb/fat gram targets.
//! Protein is anchored to body weight with a goal-dependent multiplier; the
//! remaining calories are split between carbs and fat by a goal-dependent
//! ratio, using 4 kcal/g for protein and carbs and 9 kcal/g for fat.

use crate::energy::{estimate_energy, BmrFormula};
use crate::models::{EnergyTargets, Goal, UserProfile};

pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

impl Goal {
    /// Protein target in grams per kilogram of body weight
    pub fn protein_g_per_kg(&self) -> f64 {
        match self {
            Goal::Lose => 1.8,
            Goal::Gain => 1.6,
            Goal::Maintain => 1.2,
            Goal::Lean => 1.8,
            Goal::Muscle => 1.8,
        }
    }

    /// Share of the post-protein calorie remainder that goes to carbs
    pub fn carb_share(&self) -> f64 {
        match self {
            Goal::Lose => 0.40,
            Goal::Gain => 0.55,
            Goal::Maintain => 0.50,
            Goal::Lean => 0.45,
            Goal::Muscle => 0.50,
        }
    }
}

/// Gram targets for the three macronutrients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Allocate macro gram targets from a daily calorie budget
///
/// When the protein budget alone exceeds the calorie target, carbs and fat
/// clamp to zero rather than going negative.
pub fn allocate_macros(daily_kcal: f64, weight_kg: f64, goal: Goal) -> MacroTargets {
    let protein_g = weight_kg * goal.protein_g_per_kg();
    let remainder = (daily_kcal - protein_g * PROTEIN_KCAL_PER_G).max(0.0);
    let carb_share = goal.carb_share();

    MacroTargets {
        protein_g,
        carbs_g: remainder * carb_share / CARB_KCAL_PER_G,
        fat_g: remainder * (1.0 - carb_share) / FAT_KCAL_PER_G,
    }
}

/// Run the estimator and allocator together for a profile
pub fn derive_targets(profile: &UserProfile, formula: BmrFormula) -> EnergyTargets {
    let est = estimate_energy(profile, formula);
    let macros = allocate_macros(est.daily_kcal_target, profile.weight_kg, profile.goal);

    EnergyTargets {
        bmr_kcal: est.bmr_kcal,
        tdee_kcal: est.tdee_kcal,
        daily_kcal_target: est.daily_kcal_target,
        protein_g: macros.protein_g,
        carbs_g: macros.carbs_g,
        fat_g: macros.fat_g,
    }
}
