// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::elasticsearch::ElasticsearchRepository;
use super::memory::MemorySearchRepository;
use crate::config::settings::{SearchBackendKind, SearchSettings};
use crate::domain::models::DomainEntity;
use crate::domain::search::index::{SearchError, SearchRepository};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 搜索仓库工厂
///
/// 按配置为每种实体创建搜索仓库，Elasticsearch 后端共享一个 HTTP 客户端。
pub struct SearchRepositoryFactory {
    settings: SearchSettings,
    client: Client,
}

impl SearchRepositoryFactory {
    pub fn new(settings: &SearchSettings) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        match settings.backend {
            SearchBackendKind::Elasticsearch => {
                info!("Using Elasticsearch search backend at {}", settings.url)
            }
            SearchBackendKind::Memory => info!("Using in-memory search backend"),
        }

        Ok(Self {
            settings: settings.clone(),
            client,
        })
    }

    /// 为实体类型创建搜索仓库
    pub fn create<E: DomainEntity>(&self) -> Result<Arc<dyn SearchRepository<E>>, SearchError> {
        let index = self.settings.index_name(E::INDEX_NAME);
        let repository: Arc<dyn SearchRepository<E>> = match self.settings.backend {
            SearchBackendKind::Elasticsearch => Arc::new(ElasticsearchRepository::<E>::new(
                self.client.clone(),
                &self.settings.url,
                index,
                self.settings.refresh,
            )?),
            SearchBackendKind::Memory => Arc::new(MemorySearchRepository::<E>::new(index)),
        };
        Ok(repository)
    }
}
