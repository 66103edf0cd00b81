// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::header;
use axum::response::IntoResponse;
use axum::Extension;
use metrics_exporter_prometheus::PrometheusHandle;

/// 以 Prometheus 文本格式输出当前指标
pub async fn metrics(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}
