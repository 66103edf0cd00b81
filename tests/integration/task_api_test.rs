// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use chrono::DateTime;
use serde_json::{json, Value};

const START: &str = "2024-05-01T08:30:00+02:00";
const END: &str = "2024-05-01T17:00:00-05:00";

fn instant(value: &Value) -> DateTime<chrono::FixedOffset> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn task_keeps_zoned_timestamps() {
    let app = create_test_app().await;
    let response = app.post("/api/apps").json(&json!({"name": "Runner"})).await;
    let app_id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = app
        .post("/api/tasks")
        .json(&json!({
            "app": app_id,
            "job": 42,
            "start": START,
            "end": END,
            "app_con": {"id": app_id}
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.headers()["x-crowdwareapp-alert"], "crowdwareApp.task.created");
    let id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = app.get(&format!("/api/tasks/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["app"], app_id);
    assert_eq!(body["job"], 42);
    assert_eq!(body["app_con"]["id"], app_id);
    assert_eq!(instant(&body["start"]), DateTime::parse_from_rfc3339(START).unwrap());
    assert_eq!(instant(&body["end"]), DateTime::parse_from_rfc3339(END).unwrap());

    let document = app
        .context
        .tasks
        .search_repository()
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(document.start, Some(instant(&body["start"])));
    assert_eq!(document.job, Some(42));
}

#[tokio::test]
async fn task_required_fields_are_checked() {
    let app = create_test_app().await;

    let response = app
        .post("/api/tasks")
        .json(&json!({"app": 1, "start": START}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["entityName"], "task");
    let fields: Vec<_> = body["fieldErrors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| error["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["end", "job"]);
    assert_eq!(app.context.tasks.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn tasks_are_listed_unpaged_and_deleted() {
    let app = create_test_app().await;
    let mut ids = Vec::new();
    for job in [1, 2] {
        let response = app
            .post("/api/tasks")
            .json(&json!({"job": job, "start": START, "end": END}))
            .await;
        ids.push(response.json::<Value>()["id"].as_i64().unwrap());
    }

    let response = app.get("/api/tasks").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().get("x-total-count").is_none());
    assert_eq!(response.json::<Vec<Value>>().len(), 2);

    let response = app.delete(&format!("/api/tasks/{}", ids[0])).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .get("/api/_search/tasks")
        .add_query_param("query", "job:*")
        .await;
    let hits = response.json::<Vec<Value>>();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], ids[1]);
}

#[tokio::test]
async fn tasks_have_no_mine_route() {
    let app = create_test_app().await;

    let response = app.get("/api/tasks/mine").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
