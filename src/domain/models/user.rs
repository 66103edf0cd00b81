// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用户
///
/// 实体的归属方。`api_key` 作为 Bearer 令牌标识调用者，不参与序列化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub login: String,
    #[serde(skip_serializing, default)]
    pub api_key: String,
}

impl User {
    /// 创建一个未保存的用户，并生成随机 API 密钥
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            id: None,
            login: login.into(),
            api_key: Uuid::new_v4().simple().to_string(),
        }
    }
}
