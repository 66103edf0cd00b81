// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn crowd_app_crud_round_trip() {
    let app = create_test_app().await;

    let response = app
        .post("/api/crowd-apps")
        .json(&json!({
            "name": "Crowd",
            "version": 3,
            "source": "fn main() {}\n".repeat(40),
            "user": {"id": app.user_id}
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.headers()["x-crowdwareapp-alert"],
        "crowdwareApp.crowdApp.created"
    );
    let created = response.json::<Value>();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(
        response.headers()["location"],
        format!("/api/crowd-apps/{}", id).as_str()
    );

    let fetched = app.get(&format!("/api/crowd-apps/{}", id)).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>(), created);

    let document = app
        .context
        .crowd_apps
        .search_repository()
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(serde_json::to_value(&document).unwrap(), created);

    let response = app
        .put("/api/crowd-apps")
        .json(&json!({"id": id, "name": "Renamed", "version": 4}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-crowdwareapp-alert"],
        "crowdwareApp.crowdApp.updated"
    );
    // 整行替换，未提交的字段被清空
    let updated = response.json::<Value>();
    assert_eq!(updated["name"], "Renamed");
    assert!(updated["source"].is_null());
    assert!(updated["user"].is_null());

    let response = app.delete(&format!("/api/crowd-apps/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-crowdwareapp-alert"],
        "crowdwareApp.crowdApp.deleted"
    );
    let response = app.get(&format!("/api/crowd-apps/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(app
        .context
        .crowd_apps
        .search_repository()
        .find_by_id(id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn create_crowd_app_with_id_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .post("/api/crowd-apps")
        .json(&json!({"id": 7, "name": "Crowd"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["x-crowdwareapp-params"], "crowdApp");
    assert_eq!(response.json::<Value>()["entityName"], "crowdApp");
    assert_eq!(app.context.crowd_apps.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn crowd_app_name_is_required() {
    let app = create_test_app().await;

    let response = app
        .post("/api/crowd-apps")
        .json(&json!({"version": 1}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["fieldErrors"][0]["objectName"], "crowdApp");
    assert_eq!(body["fieldErrors"][0]["field"], "name");
    assert_eq!(app.context.crowd_apps.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn crowd_apps_are_paged_and_searchable() {
    let app = create_test_app().await;
    for name in ["Alpha crowd", "Beta crowd", "Gamma solo"] {
        let response = app
            .post("/api/crowd-apps")
            .json(&json!({"name": name}))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = app
        .get("/api/crowd-apps")
        .add_query_param("size", 1)
        .add_query_param("page", 1)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "3");
    let link = response.headers()["link"].to_str().unwrap().to_string();
    assert!(link.contains("</api/crowd-apps?page=2&size=1>; rel=\"next\""));
    assert!(link.contains("</api/crowd-apps?page=0&size=1>; rel=\"prev\""));
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Beta crowd");

    let response = app
        .get("/api/_search/crowd-apps")
        .add_query_param("query", "crowd")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "2");
    let names: Vec<_> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|hit| hit["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Alpha crowd", "Beta crowd"]);
}

#[tokio::test]
async fn crowd_apps_mine_filters_by_caller() {
    let app = create_test_app().await;
    for (name, owner) in [("Mine one", app.user_id), ("Not mine", app.other_user_id)] {
        app.post("/api/crowd-apps")
            .json(&json!({"name": name, "user": {"id": owner}}))
            .await;
    }
    app.post("/api/crowd-apps")
        .json(&json!({"name": "Unowned"}))
        .await;

    let response = app.get("/api/crowd-apps/mine").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Mine one");
    assert_eq!(body[0]["user"]["id"], app.user_id);
}
