// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::context::AppContext;
use crate::config::settings::PaginationSettings;
use crate::domain::models::DomainEntity;
use crate::domain::services::entity_service::EntityService;
use crate::presentation::handlers::{entity_handler, metrics_handler};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use crate::presentation::middleware::metrics_middleware::metrics_middleware;
use axum::{
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 单个实体资源的路由
///
/// - `POST|PUT|GET /api/<resource>`
/// - `GET|DELETE /api/<resource>/{id}`
/// - `GET /api/<resource>/mine`（仅有归属用户的实体）
/// - `GET /api/_search/<resource>`
/// - `POST /api/_reindex/<resource>`
pub fn resource_routes<E: DomainEntity>(service: Arc<EntityService<E>>) -> Router {
    let base = format!("/api/{}", E::RESOURCE);

    let mut router = Router::new()
        .route(
            &base,
            post(entity_handler::create::<E>)
                .put(entity_handler::update::<E>)
                .get(entity_handler::list::<E>),
        )
        .route(
            &format!("{}/{{id}}", base),
            get(entity_handler::get_one::<E>).delete(entity_handler::delete::<E>),
        )
        .route(
            &format!("/api/_search/{}", E::RESOURCE),
            get(entity_handler::search::<E>),
        )
        .route(
            &format!("/api/_reindex/{}", E::RESOURCE),
            post(entity_handler::reindex::<E>),
        );

    if E::OWNED {
        router = router.route(
            &format!("{}/mine", base),
            get(entity_handler::list_owned::<E>),
        );
    }

    router.layer(Extension(service))
}

/// 创建应用路由
///
/// `/api` 下的路由需要认证；`/health`、`/version` 与 `/metrics` 公开。
///
/// # 参数
///
/// * `context` - 应用上下文
/// * `pagination` - 分页配置
/// * `metrics` - Prometheus 句柄，为 `None` 时不提供 `/metrics`
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(
    context: &AppContext,
    pagination: PaginationSettings,
    metrics: Option<PrometheusHandle>,
) -> Router {
    let auth_state = AuthState {
        users: context.users.clone(),
    };

    let api_routes = Router::new()
        .merge(resource_routes(context.apps.clone()))
        .merge(resource_routes(context.crowd_apps.clone()))
        .merge(resource_routes(context.jobs.clone()))
        .merge(resource_routes(context.job_attributes.clone()))
        .merge(resource_routes(context.tasks.clone()))
        .merge(resource_routes(context.payments.clone()))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(Extension(pagination));

    let mut public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    if let Some(handle) = metrics {
        public_routes = public_routes
            .route("/metrics", get(metrics_handler::metrics))
            .layer(Extension(handle));
    }

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用名称与版本号
pub async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
