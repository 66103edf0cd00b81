// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 提供从HTTP请求中提取数据的工具
/// - 经过校验的实体请求体（validated_entity）
/// - 分页、排序与查询参数（page_params）
pub mod page_params;
pub mod validated_entity;
