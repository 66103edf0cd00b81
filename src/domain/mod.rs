// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：六种业务实体、用户与分页类型
/// - 仓库接口（repositories）：关系库持久化抽象接口
/// - 搜索接口（search）：全文索引镜像的抽象接口
/// - 服务（services）：组合仓库与索引的实体服务
///
/// 领域层不依赖于任何具体的存储或索引实现。
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
