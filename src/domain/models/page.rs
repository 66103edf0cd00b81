// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 不分页查询时一次取回的最大条数（与 Elasticsearch 默认结果窗口一致）
pub const UNPAGED_SIZE: u64 = 10_000;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// 单个排序条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    /// 解析 `sort` 查询参数
    ///
    /// 格式为 `prop[,prop...][,asc|desc]`，方向作用于同一参数里的所有属性，缺省升序。
    pub fn parse(spec: &str) -> Vec<SortOrder> {
        let mut parts: Vec<&str> = spec
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let direction = match parts.last().map(|last| last.to_ascii_lowercase()) {
            Some(last) if last == "desc" => {
                parts.pop();
                Direction::Desc
            }
            Some(last) if last == "asc" => {
                parts.pop();
                Direction::Asc
            }
            _ => Direction::Asc,
        };

        parts
            .into_iter()
            .map(|property| SortOrder {
                property: property.to_string(),
                direction,
            })
            .collect()
    }
}

/// 偏移量上限，关系库以有符号 64 位整数绑定偏移
const MAX_OFFSET: u64 = i64::MAX as u64;

/// 分页请求，页码从 0 开始
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// 页码会被收紧到偏移量不超过 `i64::MAX`
    pub fn new(page: u64, size: u64) -> Self {
        let size = size.clamp(1, MAX_OFFSET);
        Self {
            page: page.min(MAX_OFFSET / size),
            size,
            sort: Vec::new(),
        }
    }

    /// 取回全部结果（上限 [`UNPAGED_SIZE`]）
    pub fn unpaged() -> Self {
        Self::new(0, UNPAGED_SIZE)
    }

    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 20)
    }
}

/// 一页查询结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub number: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        Self {
            content,
            total_elements,
            number: request.page,
            size: request.size,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            1
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}
