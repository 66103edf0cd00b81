// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// 请求计数，标签为 `method`、`path`、`status`
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
/// 请求耗时（秒），标签为 `method`、`path`
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// 初始化指标系统
///
/// 安装全局 Prometheus 记录器并注册指标说明，返回的句柄用于渲染 `/metrics`。
/// 每个进程只能安装一次。
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(HTTP_REQUESTS_TOTAL, "Total number of HTTP requests handled");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "Duration of HTTP requests in seconds"
    );

    info!("Prometheus recorder installed");
    Ok(handle)
}
