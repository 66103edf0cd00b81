// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，实现领域层定义的抽象接口。
///
/// 包含的子模块：
/// - 数据库（database）：数据库连接和 SeaORM 实体映射
/// - 指标（metrics）：Prometheus 指标记录器
/// - 仓库实现（repositories）：领域仓库接口的关系库实现
/// - 搜索（search）：搜索仓库的 Elasticsearch 与进程内实现
pub mod database;
pub mod metrics;
pub mod repositories;
pub mod search;
