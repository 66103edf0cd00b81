// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::{Page, PageRequest};
use crate::domain::models::DomainEntity;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 参数无效（缺少必填字段、未知排序属性等）
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// 实体仓库特质
///
/// 关系库上的按标识读写。`save` 对无标识实体执行插入并分配标识，
/// 对有标识实体执行整行替换（后写者胜，无版本检查）。
#[async_trait]
pub trait EntityRepository<E: DomainEntity>: Send + Sync {
    /// 保存实体并返回持久化后的结果
    async fn save(&self, entity: &E) -> Result<E, RepositoryError>;
    /// 根据ID查找实体
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, RepositoryError>;
    /// 按标识升序返回全部实体
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError>;
    /// 分页查询
    async fn find_page(&self, request: &PageRequest) -> Result<Page<E>, RepositoryError>;
    /// 删除实体，记录不存在时同样成功
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    /// 统计行数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 查询归属于指定用户的实体
    ///
    /// 仅对带有归属用户的实体有意义，其余实体返回 `InvalidParameter`。
    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<E>, RepositoryError> {
        let _ = owner_id;
        Err(RepositoryError::InvalidParameter(format!(
            "{} has no owner",
            E::ENTITY_NAME
        )))
    }
}
