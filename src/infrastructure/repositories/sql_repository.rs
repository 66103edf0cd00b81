// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::page::{Direction, Page, PageRequest};
use crate::domain::models::DomainEntity;
use crate::domain::repositories::entity_repository::{EntityRepository, RepositoryError};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

type ModelOf<M> = <<M as RowMapping>::Entity as EntityTrait>::Model;
type ColumnOf<M> = <<M as RowMapping>::Entity as EntityTrait>::Column;

/// 领域实体与数据库行之间的映射
///
/// 每张实体表实现一次，通用的 [`SqlRepository`] 依据它完成读写。
pub trait RowMapping: Send + Sync + 'static {
    /// SeaORM 实体
    type Entity: EntityTrait;
    /// 对应的活动模型
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;
    /// 领域实体
    type Domain: DomainEntity;

    /// 主键列
    fn id_column() -> ColumnOf<Self>;

    /// 归属用户列，没有归属用户的实体返回 `None`
    fn owner_column() -> Option<ColumnOf<Self>> {
        None
    }

    fn into_domain(model: ModelOf<Self>) -> Self::Domain;

    /// 标识为空时主键保持 `NotSet`，由数据库分配
    fn into_active_model(entity: &Self::Domain) -> Result<Self::ActiveModel, RepositoryError>;
}

/// 基于SeaORM的通用实体仓库
pub struct SqlRepository<M> {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
    _mapping: PhantomData<fn() -> M>,
}

impl<M> Clone for SqlRepository<M> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _mapping: PhantomData,
        }
    }
}

impl<M: RowMapping> SqlRepository<M> {
    /// 创建新的仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _mapping: PhantomData,
        }
    }
}

/// 把请求中的排序属性解析为列
///
/// 属性名既可以是列名，也可以是关联名（`user` 对应 `user_id` 列）。
pub(crate) fn resolve_column<C: FromStr>(property: &str) -> Result<C, RepositoryError> {
    C::from_str(property)
        .or_else(|_| C::from_str(&format!("{}_id", property)))
        .map_err(|_| RepositoryError::InvalidParameter(format!("unknown sort property '{}'", property)))
}

/// 按请求排序，并以主键作为最终排序键保证翻页稳定
pub(crate) fn apply_sort<E>(
    mut query: Select<E>,
    request: &PageRequest,
    id_column: E::Column,
) -> Result<Select<E>, RepositoryError>
where
    E: EntityTrait,
    E::Column: FromStr,
{
    for order in &request.sort {
        let column = resolve_column::<E::Column>(&order.property)?;
        query = match order.direction {
            Direction::Asc => query.order_by_asc(column),
            Direction::Desc => query.order_by_desc(column),
        };
    }
    Ok(query.order_by_asc(id_column))
}

/// 更新一条不存在的行时 SeaORM 返回 `RecordNotUpdated`
pub(crate) fn map_update_error(err: DbErr) -> RepositoryError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepositoryError::NotFound,
        other => RepositoryError::Database(other),
    }
}

#[async_trait]
impl<M> EntityRepository<M::Domain> for SqlRepository<M>
where
    M: RowMapping,
    ModelOf<M>: IntoActiveModel<M::ActiveModel> + Sync,
    ColumnOf<M>: FromStr,
{
    async fn save(&self, entity: &M::Domain) -> Result<M::Domain, RepositoryError> {
        let active = M::into_active_model(entity)?;
        let model = if entity.id().is_some() {
            active
                .update(self.db.as_ref())
                .await
                .map_err(map_update_error)?
        } else {
            active.insert(self.db.as_ref()).await?
        };
        Ok(M::into_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<M::Domain>, RepositoryError> {
        let model = M::Entity::find()
            .filter(M::id_column().eq(id))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(M::into_domain))
    }

    async fn find_all(&self) -> Result<Vec<M::Domain>, RepositoryError> {
        let models = M::Entity::find()
            .order_by_asc(M::id_column())
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(M::into_domain).collect())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<M::Domain>, RepositoryError> {
        let total = M::Entity::find().count(self.db.as_ref()).await?;
        let models = apply_sort(M::Entity::find(), request, M::id_column())?
            .offset(request.offset())
            .limit(request.size)
            .all(self.db.as_ref())
            .await?;
        let content = models.into_iter().map(M::into_domain).collect();
        Ok(Page::new(content, total, request))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        M::Entity::delete_many()
            .filter(M::id_column().eq(id))
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(M::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<M::Domain>, RepositoryError> {
        let column = M::owner_column().ok_or_else(|| {
            RepositoryError::InvalidParameter(format!(
                "{} has no owner",
                <M::Domain as DomainEntity>::ENTITY_NAME
            ))
        })?;
        let models = M::Entity::find()
            .filter(column.eq(owner_id))
            .order_by_asc(M::id_column())
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(M::into_domain).collect())
    }
}
