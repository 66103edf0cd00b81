// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sql_repository::{RowMapping, SqlRepository};
use crate::domain::models::task::Task;
use crate::domain::models::EntityRef;
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::infrastructure::database::entities::task;
use sea_orm::{ActiveValue::NotSet, Set};

/// 任务仓库实现
pub type TaskRepoImpl = SqlRepository<TaskMapping>;

pub struct TaskMapping;

fn required<T: Clone>(value: &Option<T>, field: &str) -> Result<T, RepositoryError> {
    value
        .clone()
        .ok_or_else(|| RepositoryError::InvalidParameter(format!("{} is required", field)))
}

impl RowMapping for TaskMapping {
    type Entity = task::Entity;
    type ActiveModel = task::ActiveModel;
    type Domain = Task;

    fn id_column() -> task::Column {
        task::Column::Id
    }

    fn into_domain(model: task::Model) -> Task {
        Task {
            id: Some(model.id),
            app: model.app,
            job: Some(model.job),
            start: Some(model.start),
            end: Some(model.end),
            app_con: model.app_con_id.map(EntityRef::new),
        }
    }

    fn into_active_model(entity: &Task) -> Result<task::ActiveModel, RepositoryError> {
        Ok(task::ActiveModel {
            id: entity.id.map_or(NotSet, Set),
            app: Set(entity.app),
            job: Set(required(&entity.job, "job")?),
            start: Set(required(&entity.start, "start")?),
            end: Set(required(&entity.end, "end")?),
            app_con_id: Set(entity.app_con.map(|app| app.id)),
        })
    }
}
