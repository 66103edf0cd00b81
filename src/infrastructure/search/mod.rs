// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索索引实现模块
///
/// - Elasticsearch REST 后端（elasticsearch）
/// - 进程内后端（memory）及其查询字符串解析（query_string）
/// - 按配置选择后端的工厂（factory）
pub mod elasticsearch;
pub mod factory;
pub mod memory;
pub mod query_string;
