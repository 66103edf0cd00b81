// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 实体服务（entity_service）组合关系库仓库与搜索仓库：
/// 每次写入关系库后立即写入索引，每次删除同样镜像到索引；
/// 读取走关系库，只有全文搜索走索引。
pub mod entity_service;
