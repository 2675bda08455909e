//! Energy target estimation
//!
//! Derives basal metabolic rate and total daily energy expenditure from body
//! metrics, then applies a flat goal adjustment and a safety floor.
//!
//! Mifflin-St Jeor is the default formula. The source material disagrees
//! with itself about which equation to use, so both it and the revised
//! Harris-Benedict equation are implemented and the choice is made once,
//! explicitly, by the caller (the backend exposes it through config).

use crate::models::{ActivityLevel, Goal, Sex, UserProfile};
use std::str::FromStr;

/// Daily calorie target is never pushed below this, whatever the goal
/// adjustment says.
pub const DAILY_KCAL_FLOOR: f64 = 1200.0;

/// BMR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmrFormula {
    /// Mifflin-St Jeor (most accurate for most people)
    #[default]
    MifflinStJeor,
    /// Revised Harris-Benedict
    HarrisBenedict,
}

impl FromStr for BmrFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mifflin_st_jeor" | "mifflin" => Ok(BmrFormula::MifflinStJeor),
            "harris_benedict" | "harris" => Ok(BmrFormula::HarrisBenedict),
            other => Err(format!("Unknown BMR formula: {}", other)),
        }
    }
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
        }
    }
}

impl Goal {
    /// Flat kcal adjustment applied on top of TDEE
    pub fn kcal_adjustment(&self) -> f64 {
        match self {
            Goal::Lose => -300.0,
            Goal::Gain => 300.0,
            Goal::Maintain => 0.0,
            Goal::Lean => -150.0,
            Goal::Muscle => 150.0,
        }
    }
}

/// BMR, TDEE, and the goal-adjusted daily target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyEstimate {
    pub bmr_kcal: f64,
    pub tdee_kcal: f64,
    pub daily_kcal_target: f64,
}

/// Calculate BMR using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Calculate BMR using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
) -> f64 {
    match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64,
    }
}

/// Calculate BMR with the specified formula
pub fn calculate_bmr(profile: &UserProfile, formula: BmrFormula) -> f64 {
    match formula {
        BmrFormula::MifflinStJeor => {
            calculate_bmr_mifflin(profile.weight_kg, profile.height_cm, profile.age_years, profile.sex)
        }
        BmrFormula::HarrisBenedict => calculate_bmr_harris_benedict(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
        ),
    }
}

/// Derive the full energy estimate for a profile
///
/// TDEE = BMR × activity multiplier; the daily target adds the goal
/// adjustment and is clamped to [`DAILY_KCAL_FLOOR`].
pub fn estimate_energy(profile: &UserProfile, formula: BmrFormula) -> EnergyEstimate {
    let bmr = calculate_bmr(profile, formula);
    let tdee = bmr * profile.activity_level.multiplier();
    let daily = (tdee + profile.goal.kcal_adjustment()).max(DAILY_KCAL_FLOOR);

    EnergyEstimate {
        bmr_kcal: bmr,
        tdee_kcal: tdee,
        daily_kcal_target: daily,
    }
}
