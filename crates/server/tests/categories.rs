mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, delete, get, post, put, seed};

#[tokio::test]
async fn create_category() {
    let app = app().await;

    let (status, content) = post(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content["id"], 1);
    assert_eq!(content["name"], "Rent");
    assert_eq!(content["budget"].as_f64(), Some(1000.0));
    assert_eq!(content["expenditure"].as_f64(), Some(0.0));
    assert_eq!(content["available"].as_f64(), Some(1000.0));
}

#[tokio::test]
async fn create_category_incomplete() {
    let app = app().await;

    let (status, _) = post(&app, "/category/", json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_category_invalid() {
    let app = app().await;

    let (status, _) = post(&app, "/category/", json!({"name": null})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_category_without_json_body() {
    let app = app().await;

    let (status, content) = common::send(&app, "POST", "/category/", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(content["detail"].is_string());
}

#[tokio::test]
async fn create_duplicated() {
    let app = app().await;
    post(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    let (status, content) = post(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content["detail"], "Name already registered");
}

#[tokio::test]
async fn read_category() {
    let app = app().await;
    let id = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    let (status, content) = get(&app, &format!("/category/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content["id"], id);
    assert_eq!(content["name"], "Rent");
    assert_eq!(content["budget"].as_f64(), Some(1000.0));
    assert_eq!(content["expenditure"].as_f64(), Some(0.0));
    assert_eq!(content["available"].as_f64(), Some(1000.0));
}

#[tokio::test]
async fn read_category_invalid() {
    let app = app().await;
    let id = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    let (status, content) = get(&app, &format!("/category/{}", id + 1)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content["detail"], "Category not found");
}

#[tokio::test]
async fn category_spending_reduces_available() {
    let app = app().await;
    let id = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;
    seed(
        &app,
        "/transaction/",
        json!({"category_id": id, "value": -1000, "comment": "Rent payment"}),
    )
    .await;

    let (status, content) = get(&app, &format!("/category/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content["budget"].as_f64(), Some(1000.0));
    assert_eq!(content["expenditure"].as_f64(), Some(-1000.0));
    assert_eq!(content["available"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn read_many_categories() {
    let app = app().await;
    let first = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;
    let second = seed(&app, "/category/", json!({"name": "Food", "budget": 500})).await;

    let (status, content) = get(&app, "/category/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content[0]["id"], first);
    assert_eq!(content[0]["name"], "Rent");
    assert_eq!(content[0]["available"].as_f64(), Some(1000.0));
    assert_eq!(content[1]["id"], second);
    assert_eq!(content[1]["name"], "Food");
    assert_eq!(content[1]["budget"].as_f64(), Some(500.0));
    assert_eq!(content[1]["available"].as_f64(), Some(500.0));
}

#[tokio::test]
async fn read_many_categories_empty() {
    let app = app().await;

    let (status, content) = get(&app, "/category/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content, json!([]));
}

#[tokio::test]
async fn update_category() {
    let app = app().await;
    let id = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    let (status, content) = put(
        &app,
        &format!("/category/{id}"),
        json!({"name": "Food", "budget": 500}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content["id"], id);
    assert_eq!(content["name"], "Food");
    assert_eq!(content["budget"].as_f64(), Some(500.0));
    assert_eq!(content["expenditure"].as_f64(), Some(0.0));
    assert_eq!(content["available"].as_f64(), Some(500.0));
}

#[tokio::test]
async fn update_category_budget_only() {
    let app = app().await;
    let id = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    let (status, content) = put(&app, &format!("/category/{id}"), json!({"budget": 1200})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content["name"], "Rent");
    assert_eq!(content["budget"].as_f64(), Some(1200.0));
}

#[tokio::test]
async fn update_category_invalid() {
    let app = app().await;
    let id = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    let (status, content) = put(
        &app,
        &format!("/category/{}", id + 1),
        json!({"name": "Food", "budget": 500}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content["detail"], "Category not found");
}

#[tokio::test]
async fn delete_category() {
    let app = app().await;
    let id = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    let (status, content) = delete(&app, &format!("/category/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content["id"], id);
    assert_eq!(content["name"], "Rent");
    assert_eq!(content["available"].as_f64(), Some(1000.0));

    let (status, _) = get(&app, &format!("/category/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_category_invalid() {
    let app = app().await;
    let id = seed(&app, "/category/", json!({"name": "Rent", "budget": 1000})).await;

    let (status, content) = delete(&app, &format!("/category/{}", id + 1)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content["detail"], "Category not found");
}
