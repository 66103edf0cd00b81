// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{same_identity, DomainEntity, EntityRef};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

/// 任务实体
///
/// 记录某个应用执行某项工作的起止时间。`app` 与 `job` 为裸 id，
/// `app_con` 为指向 [`App`](super::app::App) 的关联。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Task {
    pub id: Option<i64>,
    pub app: Option<i64>,
    #[validate(required)]
    pub job: Option<i64>,
    #[validate(required)]
    pub start: Option<DateTime<FixedOffset>>,
    #[validate(required)]
    pub end: Option<DateTime<FixedOffset>>,
    pub app_con: Option<EntityRef>,
}

impl DomainEntity for Task {
    const ENTITY_NAME: &'static str = "task";
    const RESOURCE: &'static str = "tasks";
    const INDEX_NAME: &'static str = "task";
    const PAGINATED: bool = false;
    const OWNED: bool = false;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || same_identity(self.id, other.id)
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
