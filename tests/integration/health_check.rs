// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::json;

/// 健康检查测试
///
/// 验证健康检查端点无需认证即可访问
#[tokio::test]
async fn health_check_works() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");

    let response = app.server.get("/version").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>()["name"], "crowdware");
}

/// 未授权访问测试
///
/// 验证实体端点在没有认证时返回401状态码
#[tokio::test]
async fn api_returns_401_without_auth() {
    let app = create_test_app().await;

    let response = app.server.get("/api/apps").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/api/apps")
        .add_header("Authorization", "Bearer wrong-key")
        .json(&json!({"name": "AAA"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.context.apps.repository().count().await.unwrap(), 0);
}

/// 未启用指标时不提供 `/metrics`
#[tokio::test]
async fn metrics_endpoint_is_absent_without_recorder() {
    let app = create_test_app().await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
