//! Integration tests for meal plan endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn reference_request(seed: u64) -> String {
    json!({
        "height_cm": 170.0,
        "weight_kg": 65.0,
        "age_years": 30,
        "sex": "male",
        "activity_level": "moderate",
        "goal": "maintain",
        "seed": seed
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_plan_returns_three_meals() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/plan", &reference_request(7)).await;

    assert_eq!(status, StatusCode::OK);
    let plan: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(plan["meals"].as_array().unwrap().len(), 3);

    let target = plan["targets"]["daily_kcal_target"].as_f64().unwrap();
    assert!((2400.0..=2700.0).contains(&target));
}

#[tokio::test]
async fn test_generate_plan_is_deterministic_with_seed() {
    let app = common::TestApp::new();

    let (status_a, body_a) = app.post("/api/v1/plan", &reference_request(42)).await;
    let (status_b, body_b) = app.post("/api/v1/plan", &reference_request(42)).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);

    let plan_a: Value = serde_json::from_str(&body_a).unwrap();
    let plan_b: Value = serde_json::from_str(&body_b).unwrap();
    assert_eq!(plan_a["meals"], plan_b["meals"]);
    assert_eq!(plan_a["totals"], plan_b["totals"]);
}

#[tokio::test]
async fn test_generate_plan_excludes_allergens() {
    let app = common::TestApp::new();

    let request = json!({
        "height_cm": 170.0,
        "weight_kg": 65.0,
        "age_years": 30,
        "sex": "male",
        "allergies": ["peanut"],
        "seed": 3
    })
    .to_string();

    let (status, body) = app.post("/api/v1/plan", &request).await;

    assert_eq!(status, StatusCode::OK);
    let plan: Value = serde_json::from_str(&body).unwrap();
    for meal in plan["meals"].as_array().unwrap() {
        for item in meal["items"].as_array().unwrap() {
            let tags = item["allergen_tags"].as_array().unwrap();
            assert!(!tags.iter().any(|t| t == "peanut"), "allergen leaked: {}", item["name"]);
        }
    }
}

#[tokio::test]
async fn test_generate_plan_rejects_invalid_height() {
    let app = common::TestApp::new();

    let request = json!({
        "height_cm": 250.0,
        "weight_kg": 65.0,
        "age_years": 30,
        "sex": "male"
    })
    .to_string();

    let (status, body) = app.post("/api/v1/plan", &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_export_plan_document() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/plan/export", &reference_request(11)).await;

    assert_eq!(status, StatusCode::OK);
    let export: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(export["export_version"], "1.0");
    assert!(export["exported_at"].is_string());
    assert_eq!(export["meals"].as_array().unwrap().len(), 3);
    assert!(export["targets"]["protein_g"].as_f64().unwrap() > 0.0);
}
