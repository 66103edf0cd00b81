// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::{Page, PageRequest};
use crate::domain::models::DomainEntity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search backend unreachable: {0}")]
    Transport(String),
    #[error("Search backend returned {status}: {body}")]
    Backend { status: u16, body: String },
    #[error("Invalid search document: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Cannot index an entity without an id")]
    MissingIdentity,
}

/// 搜索仓库特质
///
/// 全文索引上的镜像存储，文档与关系库行字段一致。写入为整文档覆盖。
#[async_trait]
pub trait SearchRepository<E: DomainEntity>: Send + Sync {
    /// 写入（覆盖）实体对应的文档
    async fn save(&self, entity: &E) -> Result<(), SearchError>;

    /// 删除文档，文档不存在时同样成功
    async fn delete(&self, id: i64) -> Result<(), SearchError>;

    /// 删除索引中的全部文档，索引本身保留
    async fn clear(&self) -> Result<(), SearchError>;

    /// 按标识读取文档
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, SearchError>;

    /// 执行查询字符串搜索
    async fn search(&self, query: &str, request: &PageRequest) -> Result<Page<E>, SearchError>;

    /// 确保索引存在
    async fn ensure_index(&self) -> Result<(), SearchError> {
        Ok(())
    }

    /// Get the name of the backing index
    fn index_name(&self) -> &str;
}
