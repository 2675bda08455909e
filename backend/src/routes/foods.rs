//! Food catalog endpoints

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use meal_kiosk_shared::models::{FoodCategory, FoodItem};
use serde::{Deserialize, Serialize};

/// Food catalog routes
pub fn foods_routes() -> Router<AppState> {
    Router::new().route("/", get(list_foods))
}

/// Optional filters for the catalog listing
#[derive(Debug, Default, Deserialize)]
pub struct FoodsQuery {
    pub category: Option<FoodCategory>,
}

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct FoodsResponse {
    pub count: usize,
    pub foods: Vec<FoodItem>,
}

/// GET /api/v1/foods - list the loaded food catalog
async fn list_foods(
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<FoodsQuery>,
) -> ApiResult<Json<FoodsResponse>> {
    let foods: Vec<FoodItem> = state
        .catalog()
        .iter()
        .filter(|item| query.category.map_or(true, |c| item.category == c))
        .cloned()
        .collect();

    Ok(Json(FoodsResponse {
        count: foods.len(),
        foods,
    }))
}
