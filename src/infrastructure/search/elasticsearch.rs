// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::{Direction, Page, PageRequest};
use crate::domain::models::DomainEntity;
use crate::domain::search::index::{SearchError, SearchRepository};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::marker::PhantomData;
use tracing::{debug, info};
use url::Url;

/// Elasticsearch 搜索仓库
///
/// 通过 REST API 读写单个索引：
/// - `PUT /<index>/_doc/<id>` 写入整文档
/// - `DELETE /<index>/_doc/<id>` 删除，404 视为成功
/// - `GET /<index>/_doc/<id>` 读取
/// - `POST /<index>/_search` 执行 `query_string` 查询
/// - `POST /<index>/_delete_by_query` 清空索引
///
/// 面向 7.x 及以后的集群：搜索请求总是带 `track_total_hits`，
/// 响应中的 `hits.total` 按对象形式解析。
pub struct ElasticsearchRepository<E> {
    client: Client,
    base_url: Url,
    index: String,
    refresh: bool,
    _entity: PhantomData<fn() -> E>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Hits,
}

#[derive(Debug, Deserialize)]
struct Hits {
    total: Option<Total>,
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Total {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Value,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    #[serde(default)]
    found: bool,
    #[serde(rename = "_source")]
    source: Option<Value>,
}

impl<E: DomainEntity> ElasticsearchRepository<E> {
    /// 创建新的仓库
    ///
    /// # 参数
    ///
    /// * `client` - 共享的 HTTP 客户端
    /// * `base_url` - 集群地址，如 `http://localhost:9200`
    /// * `index` - 索引名
    /// * `refresh` - 写入后是否立即刷新，使文档可被搜索
    pub fn new(
        client: Client,
        base_url: &str,
        index: impl Into<String>,
        refresh: bool,
    ) -> Result<Self, SearchError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| SearchError::Transport(format!("Invalid search url {}: {}", base_url, e)))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            index: index.into(),
            refresh,
            _entity: PhantomData,
        })
    }

    fn url(&self, path: &str) -> Result<Url, SearchError> {
        self.base_url
            .join(path)
            .map_err(|e| SearchError::Transport(format!("Invalid search path {}: {}", path, e)))
    }

    fn document_url(&self, id: i64) -> Result<Url, SearchError> {
        let mut url = self.url(&format!("{}/_doc/{}", self.index, id))?;
        if self.refresh {
            url.query_pairs_mut().append_pair("refresh", "true");
        }
        Ok(url)
    }

    fn search_body(query: &str, request: &PageRequest) -> Value {
        let mut body = json!({
            "query": { "query_string": { "query": query } },
            "from": request.offset(),
            "size": request.size,
            "track_total_hits": true,
        });

        if !request.sort.is_empty() {
            let sort: Vec<Value> = request
                .sort
                .iter()
                .map(|order| {
                    let direction = match order.direction {
                        Direction::Asc => "asc",
                        Direction::Desc => "desc",
                    };
                    let mut clause = Map::new();
                    clause.insert(order.property.clone(), json!({ "order": direction }));
                    Value::Object(clause)
                })
                .collect();
            body["sort"] = Value::Array(sort);
        }
        body
    }
}

fn transport_error(err: reqwest::Error) -> SearchError {
    SearchError::Transport(err.to_string())
}

async fn backend_error(response: Response) -> SearchError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    SearchError::Backend { status, body }
}

#[async_trait]
impl<E: DomainEntity> SearchRepository<E> for ElasticsearchRepository<E> {
    async fn save(&self, entity: &E) -> Result<(), SearchError> {
        let id = entity.id().ok_or(SearchError::MissingIdentity)?;
        let response = self
            .client
            .put(self.document_url(id)?)
            .json(entity)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        debug!("Indexed {} {} into {}", E::ENTITY_NAME, id, self.index);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), SearchError> {
        let response = self
            .client
            .delete(self.document_url(id)?)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }
        Err(backend_error(response).await)
    }

    async fn clear(&self) -> Result<(), SearchError> {
        let mut url = self.url(&format!("{}/_delete_by_query", self.index))?;
        url.query_pairs_mut().append_pair("conflicts", "proceed");
        if self.refresh {
            url.query_pairs_mut().append_pair("refresh", "true");
        }
        let response = self
            .client
            .post(url)
            .json(&json!({ "query": { "match_all": {} } }))
            .send()
            .await
            .map_err(transport_error)?;

        // 索引尚未创建时没有可删除的文档
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            info!("Cleared search index {}", self.index);
            return Ok(());
        }
        Err(backend_error(response).await)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, SearchError> {
        let url = self.url(&format!("{}/_doc/{}", self.index, id))?;
        let response = self.client.get(url).send().await.map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        let document: GetResponse = response.json().await.map_err(transport_error)?;
        match document.source {
            Some(source) if document.found => Ok(Some(serde_json::from_value(source)?)),
            _ => Ok(None),
        }
    }

    async fn search(&self, query: &str, request: &PageRequest) -> Result<Page<E>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery("empty query".to_string()));
        }

        let url = self.url(&format!("{}/_search", self.index))?;
        let response = self
            .client
            .post(url)
            .json(&Self::search_body(query, request))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::InvalidQuery(body));
        }
        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        let result: SearchResponse = response.json().await.map_err(transport_error)?;
        let content = result
            .hits
            .hits
            .into_iter()
            .map(|hit| serde_json::from_value(hit.source))
            .collect::<Result<Vec<E>, _>>()?;
        let total = match result.hits.total {
            Some(Total { value }) => value,
            None => content.len() as u64,
        };

        Ok(Page::new(content, total, request))
    }

    async fn ensure_index(&self) -> Result<(), SearchError> {
        let url = self.url(&self.index)?;
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            return Ok(());
        }
        if response.status() != StatusCode::NOT_FOUND {
            return Err(backend_error(response).await);
        }

        let response = self.client.put(url).send().await.map_err(transport_error)?;
        if response.status().is_success() {
            info!("Created search index {}", self.index);
            return Ok(());
        }

        // 并发创建时另一方可能已经建好
        let error = backend_error(response).await;
        match &error {
            SearchError::Backend { body, .. } if body.contains("resource_already_exists_exception") => Ok(()),
            _ => Err(error),
        }
    }

    fn index_name(&self) -> &str {
        &self.index
    }
}
