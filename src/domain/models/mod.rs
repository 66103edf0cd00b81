// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use validator::Validate;

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 应用（app）与众包应用（crowd_app）
/// - 工作（job）及其属性（job_attribute）
/// - 任务（task）：应用执行某个工作的时间段
/// - 支付（payment）
/// - 用户（user）：上述实体的归属方
///
/// 以及分页请求与分页结果（page）。
pub mod app;
pub mod crowd_app;
pub mod job;
pub mod job_attribute;
pub mod page;
pub mod payment;
pub mod task;
pub mod user;

/// 可持久化并同步到搜索索引的领域实体
///
/// 每种实体都按同一模板暴露：关系库行、搜索文档、REST 资源。
/// 标识在首次保存时由持久层分配，此前为 `None`。
pub trait DomainEntity:
    Clone + Debug + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    /// 实体名称，出现在告警头和错误体中（如 `app`、`crowdApp`）
    const ENTITY_NAME: &'static str;
    /// REST 资源路径段（如 `apps`、`crowd-apps`）
    const RESOURCE: &'static str;
    /// 搜索索引名称
    const INDEX_NAME: &'static str;
    /// 列表和搜索接口是否分页
    const PAGINATED: bool;
    /// 是否存在归属用户（决定是否提供 `/mine` 查询）
    const OWNED: bool;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>);
}

/// 多对一关联的引用，序列化为 `{"id": <n>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

/// 按标识比较两个实体
///
/// 任一方未保存（id 为 `None`）时不相等。
pub(crate) fn same_identity(left: Option<i64>, right: Option<i64>) -> bool {
    matches!((left, right), (Some(a), Some(b)) if a == b)
}
