// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::reindex_response::ReindexResponseDto;
use crate::domain::models::page::PageRequest;
use crate::domain::models::DomainEntity;
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::domain::search::index::SearchError;
use crate::domain::services::entity_service::EntityService;
use crate::presentation::errors::{AlertError, AppError};
use crate::presentation::extractors::page_params::PageParams;
use crate::presentation::extractors::validated_entity::ValidatedEntity;
use crate::presentation::headers;
use crate::presentation::middleware::auth_middleware::Principal;
use anyhow::anyhow;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::debug;

/// 创建实体
///
/// 请求体不能带标识；成功时返回 201、`Location` 头和保存后的实体。
pub async fn create<E: DomainEntity>(
    Extension(service): Extension<Arc<EntityService<E>>>,
    ValidatedEntity(entity): ValidatedEntity<E>,
) -> Result<Response, AppError> {
    debug!("REST request to save {} : {:?}", E::ENTITY_NAME, entity);
    create_entity(&service, entity).await
}

async fn create_entity<E: DomainEntity>(
    service: &EntityService<E>,
    entity: E,
) -> Result<Response, AppError> {
    if entity.id().is_some() {
        return Err(AlertError::id_exists(E::ENTITY_NAME).into());
    }

    let result = service.save(entity).await?;
    let id = result
        .id()
        .ok_or_else(|| anyhow!("saved {} has no id", E::ENTITY_NAME))?;

    Ok((
        StatusCode::CREATED,
        headers::location(E::RESOURCE, id),
        headers::entity_creation_alert(E::ENTITY_NAME, &id.to_string()),
        Json(result),
    )
        .into_response())
}

/// 更新实体
///
/// 请求体没有标识时按创建处理；标识对应的行不存在时返回 404。
pub async fn update<E: DomainEntity>(
    Extension(service): Extension<Arc<EntityService<E>>>,
    ValidatedEntity(entity): ValidatedEntity<E>,
) -> Result<Response, AppError> {
    debug!("REST request to update {} : {:?}", E::ENTITY_NAME, entity);
    if entity.id().is_none() {
        return create_entity(&service, entity).await;
    }

    let result = service.save(entity).await?;
    let id = result.id().map(|id| id.to_string()).unwrap_or_default();
    Ok((
        headers::entity_update_alert(E::ENTITY_NAME, &id),
        Json(result),
    )
        .into_response())
}

/// 列出实体
///
/// 分页实体返回一页数据及分页头，其余实体返回全部行。
pub async fn list<E: DomainEntity>(
    Extension(service): Extension<Arc<EntityService<E>>>,
    params: PageParams,
) -> Result<Response, AppError> {
    if !E::PAGINATED {
        debug!("REST request to get all {}", E::RESOURCE);
        let entities = service.find_all_unpaged().await?;
        return Ok(Json(entities).into_response());
    }

    debug!("REST request to get a page of {}", E::RESOURCE);
    let page = service.find_all(&params.request).await?;
    let headers = headers::pagination_headers(&page, &format!("/api/{}", E::RESOURCE));
    Ok((headers, Json(page.content)).into_response())
}

/// 列出调用者拥有的实体
pub async fn list_owned<E: DomainEntity>(
    Extension(service): Extension<Arc<EntityService<E>>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<E>>, AppError> {
    debug!(
        "REST request to get {} owned by {}",
        E::RESOURCE,
        principal.login
    );
    let entities = service.find_owned(principal.id).await?;
    Ok(Json(entities))
}

/// 按标识读取实体，不存在时返回空响应体的 404
pub async fn get_one<E: DomainEntity>(
    Extension(service): Extension<Arc<EntityService<E>>>,
    Path(id): Path<i64>,
) -> Result<Json<E>, AppError> {
    debug!("REST request to get {} : {}", E::ENTITY_NAME, id);
    let entity = service.find_one(id).await?.ok_or(RepositoryError::NotFound)?;
    Ok(Json(entity))
}

/// 删除实体，无论行是否存在都返回 200
pub async fn delete<E: DomainEntity>(
    Extension(service): Extension<Arc<EntityService<E>>>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    debug!("REST request to delete {} : {}", E::ENTITY_NAME, id);
    service.delete(id).await?;
    Ok(headers::entity_deletion_alert(E::ENTITY_NAME, &id.to_string()).into_response())
}

/// 在索引上搜索实体
pub async fn search<E: DomainEntity>(
    Extension(service): Extension<Arc<EntityService<E>>>,
    params: PageParams,
) -> Result<Response, AppError> {
    let query = params.query.ok_or_else(|| {
        SearchError::InvalidQuery("Required request parameter 'query' is not present".to_string())
    })?;
    debug!(
        "REST request to search {} for query {}",
        E::RESOURCE,
        query
    );

    if !E::PAGINATED {
        let request = PageRequest::unpaged().with_sort(params.request.sort);
        let page = service.search(&query, &request).await?;
        return Ok(Json(page.content).into_response());
    }

    let page = service.search(&query, &params.request).await?;
    let headers = headers::search_pagination_headers(
        &query,
        &page,
        &format!("/api/_search/{}", E::RESOURCE),
    );
    Ok((headers, Json(page.content)).into_response())
}

/// 用关系库数据重建实体索引
pub async fn reindex<E: DomainEntity>(
    Extension(service): Extension<Arc<EntityService<E>>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<ReindexResponseDto>, AppError> {
    debug!(
        "REST request from {} to reindex {}",
        principal.login,
        E::RESOURCE
    );
    let indexed = service.reindex().await?;
    Ok(Json(ReindexResponseDto {
        entity: E::ENTITY_NAME.to_string(),
        indexed,
    }))
}
