// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::entity_repository::RepositoryError;
use crate::domain::models::user::User;
use async_trait::async_trait;

/// 用户仓库特质
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
    /// 根据API密钥查找用户
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, RepositoryError>;
    /// 根据登录名查找用户
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError>;
}
