// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层基于 SeaORM 提供。
///
/// 包含的仓库接口：
/// - 实体仓库（entity_repository）：六种业务实体共用的按标识读写契约
/// - 用户仓库（user_repository）：归属用户与 API 密钥查询
pub mod entity_repository;
pub mod user_repository;
