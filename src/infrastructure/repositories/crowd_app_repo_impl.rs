// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sql_repository::{RowMapping, SqlRepository};
use crate::domain::models::crowd_app::CrowdApp;
use crate::domain::models::EntityRef;
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::infrastructure::database::entities::crowd_app;
use sea_orm::{ActiveValue::NotSet, Set};

/// 众包应用仓库实现
pub type CrowdAppRepoImpl = SqlRepository<CrowdAppMapping>;

pub struct CrowdAppMapping;

impl RowMapping for CrowdAppMapping {
    type Entity = crowd_app::Entity;
    type ActiveModel = crowd_app::ActiveModel;
    type Domain = CrowdApp;

    fn id_column() -> crowd_app::Column {
        crowd_app::Column::Id
    }

    fn owner_column() -> Option<crowd_app::Column> {
        Some(crowd_app::Column::UserId)
    }

    fn into_domain(model: crowd_app::Model) -> CrowdApp {
        model.into()
    }

    fn into_active_model(entity: &CrowdApp) -> Result<crowd_app::ActiveModel, RepositoryError> {
        let name = entity
            .name
            .clone()
            .ok_or_else(|| RepositoryError::InvalidParameter("name is required".to_string()))?;

        Ok(crowd_app::ActiveModel {
            id: entity.id.map_or(NotSet, Set),
            name: Set(name),
            version: Set(entity.version),
            source: Set(entity.source.clone()),
            user_id: Set(entity.user.map(|user| user.id)),
        })
    }
}

impl From<crowd_app::Model> for CrowdApp {
    fn from(model: crowd_app::Model) -> Self {
        Self {
            id: Some(model.id),
            name: Some(model.name),
            version: model.version,
            source: model.source,
            user: model.user_id.map(EntityRef::new),
        }
    }
}
