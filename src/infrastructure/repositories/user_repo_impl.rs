// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::users;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 用户仓库实现
#[derive(Clone)]
pub struct UserRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepoImpl {
    /// 创建新的用户仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepoImpl {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let model = users::ActiveModel {
            id: NotSet,
            login: Set(user.login.clone()),
            api_key: Set(user.api_key.clone()),
        };

        let model = model.insert(self.db.as_ref()).await?;
        Ok(model.into())
    }

    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, RepositoryError> {
        let model = users::Entity::find()
            .filter(users::Column::ApiKey.eq(api_key))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: Some(model.id),
            login: model.login,
            api_key: model.api_key,
        }
    }
}
