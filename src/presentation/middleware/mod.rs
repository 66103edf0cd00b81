// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 提供HTTP请求处理的中间件功能
/// 包括认证（识别调用者）和请求指标记录
pub mod auth_middleware;
pub mod metrics_middleware;
