// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::query_string::QueryString;
use crate::domain::models::page::{Direction, Page, PageRequest};
use crate::domain::models::DomainEntity;
use crate::domain::search::index::{SearchError, SearchRepository};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// 进程内搜索仓库
///
/// 文档以 JSON 形式保存在并发映射中，支持 [`QueryString`] 描述的查询子集。
/// 用于开发环境和测试。
pub struct MemorySearchRepository<E> {
    index: String,
    documents: DashMap<i64, Value>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: DomainEntity> MemorySearchRepository<E> {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            documents: DashMap::new(),
            _entity: PhantomData,
        }
    }

    /// 当前文档数
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl<E: DomainEntity> SearchRepository<E> for MemorySearchRepository<E> {
    async fn save(&self, entity: &E) -> Result<(), SearchError> {
        let id = entity.id().ok_or(SearchError::MissingIdentity)?;
        let document = serde_json::to_value(entity)?;
        self.documents.insert(id, document);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), SearchError> {
        self.documents.remove(&id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SearchError> {
        self.documents.clear();
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, SearchError> {
        let document = self.documents.get(&id).map(|entry| entry.value().clone());
        match document {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    async fn search(&self, query: &str, request: &PageRequest) -> Result<Page<E>, SearchError> {
        let query = QueryString::parse(query)?;

        let mut hits: Vec<(i64, Value)> = self
            .documents
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        hits.sort_by(|(left_id, left), (right_id, right)| {
            request
                .sort
                .iter()
                .map(|order| {
                    let ordering = compare_values(
                        left.get(&order.property).unwrap_or(&Value::Null),
                        right.get(&order.property).unwrap_or(&Value::Null),
                    );
                    match order.direction {
                        Direction::Asc => ordering,
                        Direction::Desc => ordering.reverse(),
                    }
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| left_id.cmp(right_id))
        });

        let total = hits.len() as u64;
        let content = hits
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .map(|(_, document)| serde_json::from_value(document))
            .collect::<Result<Vec<E>, _>>()?;

        Ok(Page::new(content, total, request))
    }

    fn index_name(&self) -> &str {
        &self.index
    }
}

fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (a, b) => a.to_string().cmp(&b.to_string()),
    }
}
