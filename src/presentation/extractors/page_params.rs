// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PaginationSettings;
use crate::domain::models::page::{PageRequest, SortOrder};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// 列表与搜索接口的查询参数
///
/// - `page`：从 0 开始，缺省 0
/// - `size`：缺省与上限取自 [`PaginationSettings`]
/// - `sort`：可重复，格式 `prop[,asc|desc]`
/// - `query`：搜索接口的查询串
///
/// 无法解析的数值按缺省值处理。
#[derive(Debug, Clone, PartialEq)]
pub struct PageParams {
    pub request: PageRequest,
    pub query: Option<String>,
}

impl PageParams {
    pub fn parse(raw_query: Option<&str>, settings: &PaginationSettings) -> Self {
        let mut page = 0;
        let mut size = settings.default_size;
        let mut sort = Vec::new();
        let mut query = None;

        let pairs = url::form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes());
        for (key, value) in pairs {
            match key.as_ref() {
                "page" => page = value.trim().parse().unwrap_or(0),
                "size" => {
                    size = match value.trim().parse::<u64>() {
                        Ok(0) | Err(_) => settings.default_size,
                        Ok(size) => size.min(settings.max_size),
                    }
                }
                "sort" => sort.extend(SortOrder::parse(&value)),
                "query" => query = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            request: PageRequest::new(page, size).with_sort(sort),
            query,
        }
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let settings = parts
            .extensions
            .get::<PaginationSettings>()
            .copied()
            .unwrap_or_default();
        Ok(Self::parse(parts.uri.query(), &settings))
    }
}
