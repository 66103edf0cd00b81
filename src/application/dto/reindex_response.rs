// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 重建索引响应
#[derive(Debug, Deserialize, Serialize)]
pub struct ReindexResponseDto {
    /// 实体名称
    pub entity: String,
    /// 写入索引的文档数
    pub indexed: usize,
}
