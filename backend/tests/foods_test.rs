//! Integration tests for the food catalog endpoint

mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_list_foods_returns_catalog() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/foods/").await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    let count = response["count"].as_u64().unwrap();
    assert!(count >= 20);
    assert_eq!(response["foods"].as_array().unwrap().len() as u64, count);
}

#[tokio::test]
async fn test_list_foods_filters_by_category() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/foods/?category=protein").await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    let foods = response["foods"].as_array().unwrap();
    assert!(!foods.is_empty());
    assert!(foods.iter().all(|f| f["category"] == "protein"));
}
