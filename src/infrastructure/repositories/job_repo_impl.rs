// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sql_repository::{RowMapping, SqlRepository};
use crate::domain::models::job::Job;
use crate::domain::models::EntityRef;
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::infrastructure::database::entities::job;
use sea_orm::{ActiveValue::NotSet, Set};

/// 工作仓库实现
pub type JobRepoImpl = SqlRepository<JobMapping>;

pub struct JobMapping;

impl RowMapping for JobMapping {
    type Entity = job::Entity;
    type ActiveModel = job::ActiveModel;
    type Domain = Job;

    fn id_column() -> job::Column {
        job::Column::Id
    }

    fn owner_column() -> Option<job::Column> {
        Some(job::Column::UserId)
    }

    fn into_domain(model: job::Model) -> Job {
        Job {
            id: Some(model.id),
            offer: model.offer.map(|offer| offer.normalize()),
            user: model.user_id.map(EntityRef::new),
        }
    }

    fn into_active_model(entity: &Job) -> Result<job::ActiveModel, RepositoryError> {
        Ok(job::ActiveModel {
            id: entity.id.map_or(NotSet, Set),
            offer: Set(entity.offer),
            user_id: Set(entity.user.map(|user| user.id)),
        })
    }
}
