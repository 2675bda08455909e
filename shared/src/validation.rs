//! Input validation for kiosk form fields
//!
//! The core calculators assume in-range numbers; these checks run at the
//! boundary (route layer) before a profile ever reaches them.

use crate::models::UserProfile;

/// Validate height value (in cm), accepted range 100-230
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 100.0 {
        return Err("Height must be at least 100 cm".to_string());
    }
    if height_cm > 230.0 {
        return Err("Height must be at most 230 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg), accepted range 30-200
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 30.0 {
        return Err("Weight must be at least 30 kg".to_string());
    }
    if weight_kg > 200.0 {
        return Err("Weight must be at most 200 kg".to_string());
    }
    Ok(())
}

/// Validate age in years, accepted range 10-90
pub fn validate_age_years(age_years: i32) -> Result<(), String> {
    if age_years < 10 {
        return Err("Age must be at least 10 years".to_string());
    }
    if age_years > 90 {
        return Err("Age must be at most 90 years".to_string());
    }
    Ok(())
}

/// Validate every numeric field of a profile, reporting the first violation
pub fn validate_profile(profile: &UserProfile) -> Result<(), String> {
    validate_height_cm(profile.height_cm)?;
    validate_weight_kg(profile.weight_kg)?;
    validate_age_years(profile.age_years)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal, Preferences, Sex};
    use proptest::prelude::*;

    #[test]
    fn test_validate_height() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(100.0).is_ok());
        assert!(validate_height_cm(230.0).is_ok());
        assert!(validate_height_cm(99.9).is_err());
        assert!(validate_height_cm(230.1).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
        assert!(validate_height_cm(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight_kg(65.0).is_ok());
        assert!(validate_weight_kg(30.0).is_ok());
        assert!(validate_weight_kg(200.0).is_ok());
        assert!(validate_weight_kg(29.9).is_err());
        assert!(validate_weight_kg(200.1).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age_years(30).is_ok());
        assert!(validate_age_years(10).is_ok());
        assert!(validate_age_years(90).is_ok());
        assert!(validate_age_years(9).is_err());
        assert!(validate_age_years(91).is_err());
    }

    #[test]
    fn test_validate_profile_reports_first_error() {
        let profile = UserProfile {
            height_cm: 50.0,
            weight_kg: 10.0,
            age_years: 5,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            preferences: Preferences::default(),
        };
        let err = validate_profile(&profile).unwrap_err();
        assert!(err.contains("Height"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_height_range(height in 100.0f64..=230.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_invalid_height_below_min(height in 0.0f64..100.0) {
            prop_assert!(validate_height_cm(height).is_err());
        }

        #[test]
        fn prop_valid_weight_range(weight in 30.0f64..=200.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_above_max(weight in 200.1f64..1000.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_age_range(age in 10i32..=90) {
            prop_assert!(validate_age_years(age).is_ok());
        }
    }
}
