// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::Page;
use axum::http::header::{HeaderName, HeaderValue, LINK, LOCATION};
use axum::http::HeaderMap;

/// 告警头使用的应用名
pub const APPLICATION_NAME: &str = "crowdwareApp";

pub const X_ALERT: HeaderName = HeaderName::from_static("x-crowdwareapp-alert");
pub const X_ERROR: HeaderName = HeaderName::from_static("x-crowdwareapp-error");
pub const X_PARAMS: HeaderName = HeaderName::from_static("x-crowdwareapp-params");
pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// 非 ASCII 或控制字符按百分号编码
fn header_value(value: &str) -> HeaderValue {
    if value.is_ascii() {
        if let Ok(header) = HeaderValue::from_str(value) {
            return header;
        }
    }
    HeaderValue::from_str(&urlencoding::encode(value)).unwrap_or(HeaderValue::from_static(""))
}

/// 成功告警头
pub fn alert_headers(message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_ALERT, header_value(message));
    headers.insert(X_PARAMS, header_value(param));
    headers
}

pub fn entity_creation_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert_headers(
        &format!("{}.{}.created", APPLICATION_NAME, entity_name),
        param,
    )
}

pub fn entity_update_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert_headers(
        &format!("{}.{}.updated", APPLICATION_NAME, entity_name),
        param,
    )
}

pub fn entity_deletion_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert_headers(
        &format!("{}.{}.deleted", APPLICATION_NAME, entity_name),
        param,
    )
}

/// 失败告警头：`error.<key>`，参数为实体名
pub fn failure_alert(entity_name: &str, error_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_ERROR, header_value(&format!("error.{}", error_key)));
    headers.insert(X_PARAMS, header_value(entity_name));
    headers
}

/// 创建成功时的 `Location` 头
pub fn location(resource: &str, id: i64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(LOCATION, header_value(&format!("/api/{}/{}", resource, id)));
    headers
}

/// 列表分页头：`X-Total-Count` 与 `Link`
pub fn pagination_headers<T>(page: &Page<T>, base_url: &str) -> HeaderMap {
    link_headers(page, |number, size| {
        format!("{}?page={}&size={}", base_url, number, size)
    })
}

/// 搜索分页头，链接中带上编码后的查询串
pub fn search_pagination_headers<T>(query: &str, page: &Page<T>, base_url: &str) -> HeaderMap {
    let query = urlencoding::encode(query);
    link_headers(page, |number, size| {
        format!("{}?query={}&page={}&size={}", base_url, query, number, size)
    })
}

fn link_headers<T, F>(page: &Page<T>, uri: F) -> HeaderMap
where
    F: Fn(u64, u64) -> String,
{
    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        let next = uri(page.number.saturating_add(1), page.size);
        links.push(format!("<{}>; rel=\"next\"", next));
    }
    if page.has_previous() {
        links.push(format!("<{}>; rel=\"prev\"", uri(page.number - 1, page.size)));
    }
    let last_page = page.total_pages().saturating_sub(1);
    links.push(format!("<{}>; rel=\"last\"", uri(last_page, page.size)));
    links.push(format!("<{}>; rel=\"first\"", uri(0, page.size)));

    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT, HeaderValue::from(page.total_elements));
    headers.insert(LINK, header_value(&links.join(",")));
    headers
}
