//! Meal plan endpoints

use crate::error::ApiResult;
use crate::services::{PlanExport, PlanService};
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use meal_kiosk_shared::types::{PlanRequest, PlanResponse};
use tracing::info;

/// Meal plan routes
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_plan))
        .route("/export", post(export_plan))
}

/// POST /api/v1/plan - generate a day plan from the kiosk form input
async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> ApiResult<Json<PlanResponse>> {
    let response = PlanService::generate(state.catalog(), &request, state.bmr_formula())?;

    info!(
        goal = ?request.goal,
        kcal_target = response.targets.daily_kcal_target,
        "Meal plan generated"
    );

    Ok(Json(response))
}

/// POST /api/v1/plan/export - generate a plan and wrap it as a download document
async fn export_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> ApiResult<Json<PlanExport>> {
    let response = PlanService::generate(state.catalog(), &request, state.bmr_formula())?;
    Ok(Json(PlanExport::from_response(response)))
}
