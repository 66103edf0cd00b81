// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// - 实体处理器（entity_handler）：六种实体共用的泛型 REST 处理逻辑
/// - 指标处理器（metrics_handler）：Prometheus 文本输出
pub mod entity_handler;
pub mod metrics_handler;
