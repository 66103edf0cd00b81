// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::{json, Value};

#[tokio::test]
async fn create_job_stores_offer() {
    let app = create_test_app().await;

    let response = app
        .post("/api/jobs")
        .json(&json!({"offer": 1.5, "user": {"id": app.user_id}}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.headers()["x-crowdwareapp-alert"], "crowdwareApp.job.created");
    let body = response.json::<Value>();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["offer"], 1.5);
    assert_eq!(body["user"]["id"], app.user_id);

    let row = app.context.jobs.find_one(id).await.unwrap().unwrap();
    assert_eq!(row.offer, Some(Decimal::new(15, 1)));
    let document = app
        .context
        .jobs
        .search_repository()
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(document.offer, row.offer);
}

#[tokio::test]
async fn update_job_replaces_offer() {
    let app = create_test_app().await;
    let response = app.post("/api/jobs").json(&json!({"offer": 1.5})).await;
    let id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = app
        .put("/api/jobs")
        .json(&json!({"id": id, "offer": 2.25}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["offer"], 2.25);

    let row = app.context.jobs.find_one(id).await.unwrap().unwrap();
    assert_eq!(row.offer, Some(Decimal::new(225, 2)));
    let document = app
        .context
        .jobs
        .search_repository()
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(document.offer, Some(Decimal::new(225, 2)));
}

#[tokio::test]
async fn jobs_are_sorted_by_offer() {
    let app = create_test_app().await;
    for offer in [2.25, 0.5, 1.5] {
        app.post("/api/jobs").json(&json!({"offer": offer})).await;
    }

    let response = app
        .get("/api/jobs")
        .add_query_param("sort", "offer,asc")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "3");
    let offers: Vec<_> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|job| job["offer"].as_f64().unwrap())
        .collect();
    assert_eq!(offers, vec![0.5, 1.5, 2.25]);
}

#[tokio::test]
async fn delete_job_clears_both_stores() {
    let app = create_test_app().await;
    let response = app.post("/api/jobs").json(&json!({"offer": 1.5})).await;
    let id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = app.delete(&format!("/api/jobs/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-crowdwareapp-alert"], "crowdwareApp.job.deleted");

    assert_eq!(
        app.get(&format!("/api/jobs/{}", id)).await.status_code(),
        StatusCode::NOT_FOUND
    );
    let response = app
        .get("/api/_search/jobs")
        .add_query_param("query", format!("id:{}", id))
        .await;
    assert_eq!(response.headers()["x-total-count"], "0");
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn jobs_mine_and_search_by_owner() {
    let app = create_test_app().await;
    app.post("/api/jobs")
        .json(&json!({"offer": 1.5, "user": {"id": app.user_id}}))
        .await;
    app.post("/api/jobs")
        .json(&json!({"offer": 2.25, "user": {"id": app.other_user_id}}))
        .await;

    let response = app.get("/api/jobs/mine").await;
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["offer"], 1.5);

    let response = app
        .get("/api/_search/jobs")
        .add_query_param("query", format!("user.id:{}", app.other_user_id))
        .await;
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["offer"], 2.25);
}
