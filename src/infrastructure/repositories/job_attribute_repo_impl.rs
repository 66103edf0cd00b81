// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sql_repository::{RowMapping, SqlRepository};
use crate::domain::models::job_attribute::JobAttribute;
use crate::domain::models::EntityRef;
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::infrastructure::database::entities::job_attribute;
use sea_orm::{ActiveValue::NotSet, Set};

/// 工作属性仓库实现
pub type JobAttributeRepoImpl = SqlRepository<JobAttributeMapping>;

pub struct JobAttributeMapping;

impl RowMapping for JobAttributeMapping {
    type Entity = job_attribute::Entity;
    type ActiveModel = job_attribute::ActiveModel;
    type Domain = JobAttribute;

    fn id_column() -> job_attribute::Column {
        job_attribute::Column::Id
    }

    fn into_domain(model: job_attribute::Model) -> JobAttribute {
        JobAttribute {
            id: Some(model.id),
            name: Some(model.name),
            value: model.value,
            job: model.job_id.map(EntityRef::new),
        }
    }

    fn into_active_model(
        entity: &JobAttribute,
    ) -> Result<job_attribute::ActiveModel, RepositoryError> {
        let name = entity
            .name
            .clone()
            .ok_or_else(|| RepositoryError::InvalidParameter("name is required".to_string()))?;

        Ok(job_attribute::ActiveModel {
            id: entity.id.map_or(NotSet, Set),
            name: Set(name),
            value: Set(entity.value.clone()),
            job_id: Set(entity.job.map(|job| job.id)),
        })
    }
}
