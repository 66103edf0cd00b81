// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口基于SeaORM的具体实现。
/// 六种实体共用 [`sql_repository::SqlRepository`]，各自只提供行映射。
pub mod app_repo_impl;
pub mod crowd_app_repo_impl;
pub mod job_attribute_repo_impl;
pub mod job_repo_impl;
pub mod payment_repo_impl;
pub mod sql_repository;
pub mod task_repo_impl;
pub mod user_repo_impl;
