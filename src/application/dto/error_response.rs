// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 错误响应数据传输对象
///
/// 创建或更新被拒绝时返回，`errorKey` 为 `idexists` 或 `validation`。
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseDto {
    /// 实体名称
    pub entity_name: String,
    /// 错误键
    pub error_key: String,
    /// 可读的错误信息
    pub message: String,
    /// 字段校验错误，仅校验失败时出现
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldErrorDto>,
}

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorDto {
    pub object_name: String,
    pub field: String,
    /// 约束名，如 `NotNull`、`Size`
    pub message: String,
}
