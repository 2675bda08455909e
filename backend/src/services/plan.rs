//! Plan generation service
//!
//! Runs the full pipeline for one "generate" press: validate the form
//! input, derive energy and macro targets, then assemble the three meals
//! from the catalog. Stateless; the catalog handle is passed in.

use crate::error::ApiError;
use meal_kiosk_shared::assembler::assemble_plan;
use meal_kiosk_shared::energy::BmrFormula;
use meal_kiosk_shared::macro_targets::derive_targets;
use meal_kiosk_shared::models::FoodItem;
use meal_kiosk_shared::types::{PlanRequest, PlanResponse};
use meal_kiosk_shared::validation::validate_profile;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Plan generation service
pub struct PlanService;

impl PlanService {
    /// Generate a meal plan for one request
    ///
    /// A caller-supplied seed pins the RNG so tie-breaks are reproducible;
    /// without one, each call may legitimately produce a different plan.
    pub fn generate(
        catalog: &[FoodItem],
        request: &PlanRequest,
        formula: BmrFormula,
    ) -> Result<PlanResponse, ApiError> {
        let profile = request.to_profile();
        validate_profile(&profile).map_err(ApiError::Validation)?;

        let targets = derive_targets(&profile, formula);

        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let plan = assemble_plan(catalog, &profile.preferences, &targets, &mut rng);

        let warnings: Vec<String> = plan
            .meals
            .iter()
            .filter(|meal| meal.items.is_empty())
            .map(|meal| format!("no matching food for {}", meal.slot))
            .collect();

        debug!(
            kcal_target = targets.daily_kcal_target,
            plan_kcal = plan.totals.kcal,
            warnings = warnings.len(),
            "Generated meal plan"
        );

        Ok(PlanResponse {
            targets,
            meals: plan.meals,
            totals: plan.totals,
            warnings,
        })
    }
}
