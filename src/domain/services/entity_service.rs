// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::{Page, PageRequest};
use crate::domain::models::DomainEntity;
use crate::domain::repositories::entity_repository::{EntityRepository, RepositoryError};
use crate::domain::search::index::{SearchError, SearchRepository};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// 实体服务
///
/// 关系库与搜索索引的双写不在同一事务中：两次调用顺序执行，
/// 第二步失败时不回滚第一步，两边可能短暂不一致，直到下一次写入、删除或重建索引。
pub struct EntityService<E: DomainEntity> {
    repository: Arc<dyn EntityRepository<E>>,
    search_repository: Arc<dyn SearchRepository<E>>,
}

impl<E: DomainEntity> EntityService<E> {
    pub fn new(
        repository: Arc<dyn EntityRepository<E>>,
        search_repository: Arc<dyn SearchRepository<E>>,
    ) -> Self {
        Self {
            repository,
            search_repository,
        }
    }

    /// 保存实体，随后把保存结果写入索引
    pub async fn save(&self, entity: E) -> Result<E, ServiceError> {
        debug!("Request to save {} : {:?}", E::ENTITY_NAME, entity);
        let result = self.repository.save(&entity).await?;
        self.search_repository.save(&result).await?;
        Ok(result)
    }

    /// 分页获取全部实体
    pub async fn find_all(&self, request: &PageRequest) -> Result<Page<E>, ServiceError> {
        debug!("Request to get a page of {}", E::RESOURCE);
        Ok(self.repository.find_page(request).await?)
    }

    /// 不分页获取全部实体
    pub async fn find_all_unpaged(&self) -> Result<Vec<E>, ServiceError> {
        debug!("Request to get all {}", E::RESOURCE);
        Ok(self.repository.find_all().await?)
    }

    /// 按标识读取，只查关系库
    pub async fn find_one(&self, id: i64) -> Result<Option<E>, ServiceError> {
        debug!("Request to get {} : {}", E::ENTITY_NAME, id);
        Ok(self.repository.find_by_id(id).await?)
    }

    /// 查询调用者拥有的实体，调用者标识显式传入
    pub async fn find_owned(&self, owner_id: i64) -> Result<Vec<E>, ServiceError> {
        debug!("Request to get {} owned by user {}", E::RESOURCE, owner_id);
        Ok(self.repository.find_by_owner(owner_id).await?)
    }

    /// 先删关系库行，再删索引文档
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        debug!("Request to delete {} : {}", E::ENTITY_NAME, id);
        self.repository.delete(id).await?;
        self.search_repository.delete(id).await?;
        Ok(())
    }

    /// 在索引上执行查询，索引不可用时直接失败，不回退到关系库
    pub async fn search(
        &self,
        query: &str,
        request: &PageRequest,
    ) -> Result<Page<E>, ServiceError> {
        debug!(
            "Request to search for a page of {} for query {}",
            E::RESOURCE,
            query
        );
        Ok(self.search_repository.search(query, request).await?)
    }

    /// 用关系库的全部行重建索引，返回写入的文档数
    ///
    /// 先清空索引，行已不存在的文档不会保留。
    pub async fn reindex(&self) -> Result<usize, ServiceError> {
        let entities = self.repository.find_all().await?;
        self.search_repository.clear().await?;
        for entity in &entities {
            self.search_repository.save(entity).await?;
        }
        info!(
            "Reindexed {} {} into index {}",
            entities.len(),
            E::RESOURCE,
            self.search_repository.index_name()
        );
        Ok(entities.len())
    }

    pub async fn ensure_index(&self) -> Result<(), ServiceError> {
        Ok(self.search_repository.ensure_index().await?)
    }

    pub fn repository(&self) -> &Arc<dyn EntityRepository<E>> {
        &self.repository
    }

    pub fn search_repository(&self) -> &Arc<dyn SearchRepository<E>> {
        &self.search_repository
    }
}
