// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, TestApp};
use axum::http::StatusCode;
use crowdware::domain::models::app::App;
use serde_json::{json, Value};

const DEFAULT_NAME: &str = "AAA";
const UPDATED_NAME: &str = "BBB";
const DEFAULT_SOURCE: &str = "AAAAA";
const UPDATED_SOURCE: &str = "BBBBB";

async fn count(app: &TestApp) -> u64 {
    app.context.apps.repository().count().await.unwrap()
}

async fn indexed(app: &TestApp, id: i64) -> Option<App> {
    app.context
        .apps
        .search_repository()
        .find_by_id(id)
        .await
        .unwrap()
}

async fn create_app(app: &TestApp, name: &str, version: i32) -> i64 {
    let response = app
        .post("/api/apps")
        .json(&json!({"name": name, "source": DEFAULT_SOURCE, "version": version}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn create_app_writes_row_and_document() {
    let app = create_test_app().await;
    let before = count(&app).await;

    let response = app
        .post("/api/apps")
        .json(&json!({"name": DEFAULT_NAME, "source": DEFAULT_SOURCE, "version": 1}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    let id = body["id"].as_i64().unwrap();
    let headers = response.headers();
    assert_eq!(headers["location"], format!("/api/apps/{}", id).as_str());
    assert_eq!(headers["x-crowdwareapp-alert"], "crowdwareApp.app.created");
    assert_eq!(headers["x-crowdwareapp-params"], id.to_string().as_str());
    assert_eq!(count(&app).await, before + 1);

    let row = app.context.apps.find_one(id).await.unwrap().unwrap();
    assert_eq!(row.name.as_deref(), Some(DEFAULT_NAME));
    assert_eq!(row.source.as_deref(), Some(DEFAULT_SOURCE));
    assert_eq!(row.version, Some(1));

    let document = indexed(&app, id).await.unwrap();
    assert_eq!(document.name, row.name);
    assert_eq!(document.source, row.source);
    assert_eq!(document.version, row.version);
}

#[tokio::test]
async fn create_app_with_existing_id_is_rejected() {
    let app = create_test_app().await;
    let before = count(&app).await;

    let response = app
        .post("/api/apps")
        .json(&json!({"id": 1, "name": DEFAULT_NAME, "source": DEFAULT_SOURCE, "version": 1}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["x-crowdwareapp-error"], "error.idexists");
    assert_eq!(response.headers()["x-crowdwareapp-params"], "app");
    let body = response.json::<Value>();
    assert_eq!(body["entityName"], "app");
    assert_eq!(body["errorKey"], "idexists");
    assert_eq!(count(&app).await, before);
    assert!(indexed(&app, 1).await.is_none());
}

#[tokio::test]
async fn check_name_is_required() {
    let app = create_test_app().await;
    let before = count(&app).await;

    let response = app
        .post("/api/apps")
        .json(&json!({"source": DEFAULT_SOURCE, "version": 1}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["errorKey"], "validation");
    assert_eq!(
        body["fieldErrors"],
        json!([{"objectName": "app", "field": "name", "message": "NotNull"}])
    );
    assert_eq!(count(&app).await, before);
}

#[tokio::test]
async fn check_name_length_is_validated() {
    let app = create_test_app().await;

    let short = app.post("/api/apps").json(&json!({"name": "AA"})).await;
    assert_eq!(short.status_code(), StatusCode::BAD_REQUEST);

    let long = app
        .post("/api/apps")
        .json(&json!({"name": "A".repeat(51)}))
        .await;
    assert_eq!(long.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(long.json::<Value>()["fieldErrors"][0]["message"], "Size");
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .post("/api/apps")
        .content_type("application/json")
        .bytes("{\"name\": ".into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn get_all_apps_is_paged() {
    let app = create_test_app().await;
    for (name, version) in [("AAA", 3), ("BBB", 1), ("CCC", 2)] {
        create_app(&app, name, version).await;
    }

    let response = app
        .get("/api/apps")
        .add_query_param("page", 0)
        .add_query_param("size", 2)
        .add_query_param("sort", "version,desc")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "3");
    let link = response.headers()["link"].to_str().unwrap().to_string();
    assert!(link.contains("</api/apps?page=1&size=2>; rel=\"next\""));
    assert!(link.contains("</api/apps?page=1&size=2>; rel=\"last\""));
    assert!(link.contains("</api/apps?page=0&size=2>; rel=\"first\""));
    assert!(!link.contains("rel=\"prev\""));

    let body = response.json::<Vec<Value>>();
    let names: Vec<_> = body.iter().map(|app| app["name"].clone()).collect();
    assert_eq!(names, vec![json!("AAA"), json!("CCC")]);
}

#[tokio::test]
async fn unknown_sort_property_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .get("/api/apps")
        .add_query_param("sort", "colour,asc")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_app_returns_submitted_fields() {
    let app = create_test_app().await;
    let id = create_app(&app, DEFAULT_NAME, 1).await;

    let response = app.get(&format!("/api/apps/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": id, "name": DEFAULT_NAME, "source": DEFAULT_SOURCE, "version": 1, "user_app": null})
    );
}

#[tokio::test]
async fn get_non_existing_app_is_404() {
    let app = create_test_app().await;

    let response = app.get(&format!("/api/apps/{}", i64::MAX)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn app_lifecycle_scenario() {
    let app = create_test_app().await;

    // create
    let id = create_app(&app, DEFAULT_NAME, 1).await;
    assert_eq!(
        indexed(&app, id).await.unwrap().name.as_deref(),
        Some(DEFAULT_NAME)
    );

    // update
    let response = app
        .put("/api/apps")
        .json(&json!({"id": id, "name": UPDATED_NAME, "source": UPDATED_SOURCE, "version": 2}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-crowdwareapp-alert"], "crowdwareApp.app.updated");
    assert_eq!(response.json::<Value>()["name"], UPDATED_NAME);

    let row = app.context.apps.find_one(id).await.unwrap().unwrap();
    assert_eq!(row.name.as_deref(), Some(UPDATED_NAME));
    assert_eq!(row.source.as_deref(), Some(UPDATED_SOURCE));
    assert_eq!(row.version, Some(2));
    let document = indexed(&app, id).await.unwrap();
    assert_eq!(document.name.as_deref(), Some(UPDATED_NAME));
    assert_eq!(document.source.as_deref(), Some(UPDATED_SOURCE));
    assert_eq!(document.version, Some(2));
    assert_eq!(count(&app).await, 1);

    // delete
    let response = app.delete(&format!("/api/apps/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-crowdwareapp-alert"], "crowdwareApp.app.deleted");
    assert_eq!(response.headers()["x-crowdwareapp-params"], id.to_string().as_str());

    let response = app.get(&format!("/api/apps/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(indexed(&app, id).await.is_none());
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn update_without_id_creates() {
    let app = create_test_app().await;

    let response = app
        .put("/api/apps")
        .json(&json!({"name": DEFAULT_NAME, "version": 1}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.headers()["x-crowdwareapp-alert"], "crowdwareApp.app.created");
    assert_eq!(count(&app).await, 1);
}

#[tokio::test]
async fn update_missing_row_is_404() {
    let app = create_test_app().await;

    let response = app
        .put("/api/apps")
        .json(&json!({"id": 4242, "name": DEFAULT_NAME}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(indexed(&app, 4242).await.is_none());
}

#[tokio::test]
async fn update_is_validated() {
    let app = create_test_app().await;
    let id = create_app(&app, DEFAULT_NAME, 1).await;

    let response = app.put("/api/apps").json(&json!({"id": id})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let row = app.context.apps.find_one(id).await.unwrap().unwrap();
    assert_eq!(row.name.as_deref(), Some(DEFAULT_NAME));
}

#[tokio::test]
async fn delete_missing_app_still_succeeds() {
    let app = create_test_app().await;

    let response = app.delete("/api/apps/999").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-crowdwareapp-alert"], "crowdwareApp.app.deleted");
}

#[tokio::test]
async fn search_app_by_id() {
    let app = create_test_app().await;
    let id = create_app(&app, DEFAULT_NAME, 1).await;
    create_app(&app, UPDATED_NAME, 2).await;

    let query = format!("id:{}", id);
    let response = app
        .get("/api/_search/apps")
        .add_query_param("query", &query)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "1");
    let link = response.headers()["link"].to_str().unwrap().to_string();
    assert!(link.contains(&format!(
        "</api/_search/apps?query=id%3A{}&page=0&size=20>; rel=\"first\"",
        id
    )));

    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["id"], id);
    assert_eq!(body[0]["name"], DEFAULT_NAME);
    assert_eq!(body[0]["source"], DEFAULT_SOURCE);
}

#[tokio::test]
async fn search_requires_query() {
    let app = create_test_app().await;

    let response = app.get("/api/_search/apps").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_does_not_consult_database() {
    let app = create_test_app().await;
    let id = create_app(&app, DEFAULT_NAME, 1).await;
    app.context.apps.search_repository().delete(id).await.unwrap();

    let response = app
        .get("/api/_search/apps")
        .add_query_param("query", format!("id:{}", id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.json::<Vec<Value>>().is_empty());

    // 按标识读取只走关系库
    let response = app.get(&format!("/api/apps/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn reindex_restores_documents() {
    let app = create_test_app().await;
    let first = create_app(&app, DEFAULT_NAME, 1).await;
    let second = create_app(&app, UPDATED_NAME, 2).await;
    app.context.apps.search_repository().delete(first).await.unwrap();
    app.context.apps.search_repository().delete(second).await.unwrap();

    let response = app.post("/api/_reindex/apps").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"entity": "app", "indexed": 2}));
    assert!(indexed(&app, first).await.is_some());
    assert!(indexed(&app, second).await.is_some());
}

#[tokio::test]
async fn mine_lists_only_callers_apps() {
    let app = create_test_app().await;

    let response = app
        .post("/api/apps")
        .json(&json!({"name": "Mine", "user_app": {"id": app.user_id}}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["user_app"]["id"], app.user_id);

    let response = app
        .post("/api/apps")
        .json(&json!({"name": "Theirs", "user_app": {"id": app.other_user_id}}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = app.get("/api/apps/mine").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Mine");

    let response = app
        .server
        .get("/api/apps/mine")
        .add_header("Authorization", format!("Bearer {}", app.other_api_key))
        .await;
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Theirs");
}

#[tokio::test]
async fn reindex_drops_documents_without_rows() {
    let app = create_test_app().await;
    let kept = create_app(&app, DEFAULT_NAME, 1).await;
    let orphan = create_app(&app, "Orphan", 2).await;
    app.context.apps.repository().delete(orphan).await.unwrap();

    let response = app.post("/api/_reindex/apps").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"entity": "app", "indexed": 1}));
    assert!(indexed(&app, orphan).await.is_none());

    let response = app
        .get("/api/_search/apps")
        .add_query_param("query", "*")
        .await;
    assert_eq!(response.headers()["x-total-count"], "1");
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["id"], kept);
}

#[tokio::test]
async fn huge_page_number_returns_empty_page() {
    let app = create_test_app().await;
    create_app(&app, DEFAULT_NAME, 1).await;

    let response = app
        .get("/api/apps")
        .add_query_param("page", u64::MAX)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "1");
    assert!(response.json::<Vec<Value>>().is_empty());

    let response = app
        .get("/api/_search/apps")
        .add_query_param("query", "*")
        .add_query_param("page", u64::MAX)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "1");
    let link = response.headers()["link"].to_str().unwrap().to_string();
    assert!(!link.contains("rel=\"next\""));
    assert!(link.contains("rel=\"prev\""));
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn unsupported_search_syntax_is_rejected() {
    let app = create_test_app().await;
    create_app(&app, DEFAULT_NAME, 1).await;

    for query in ["NOT aaa", "-aaa", "version:[1 TO 5]"] {
        let response = app
            .get("/api/_search/apps")
            .add_query_param("query", query)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", query);
    }
}
