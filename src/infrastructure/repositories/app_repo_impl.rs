// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sql_repository::{RowMapping, SqlRepository};
use crate::domain::models::app::App;
use crate::domain::models::EntityRef;
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::infrastructure::database::entities::app;
use sea_orm::{ActiveValue::NotSet, Set};

/// 应用仓库实现
pub type AppRepoImpl = SqlRepository<AppMapping>;

/// `app` 表映射
pub struct AppMapping;

impl RowMapping for AppMapping {
    type Entity = app::Entity;
    type ActiveModel = app::ActiveModel;
    type Domain = App;

    fn id_column() -> app::Column {
        app::Column::Id
    }

    fn owner_column() -> Option<app::Column> {
        Some(app::Column::UserAppId)
    }

    fn into_domain(model: app::Model) -> App {
        model.into()
    }

    fn into_active_model(entity: &App) -> Result<app::ActiveModel, RepositoryError> {
        let name = entity
            .name
            .clone()
            .ok_or_else(|| RepositoryError::InvalidParameter("name is required".to_string()))?;

        Ok(app::ActiveModel {
            id: entity.id.map_or(NotSet, Set),
            name: Set(name),
            source: Set(entity.source.clone()),
            version: Set(entity.version),
            user_app_id: Set(entity.user_app.map(|user| user.id)),
        })
    }
}

impl From<app::Model> for App {
    fn from(model: app::Model) -> Self {
        Self {
            id: Some(model.id),
            name: Some(model.name),
            source: model.source,
            version: model.version,
            user_app: model.user_app_id.map(EntityRef::new),
        }
    }
}
