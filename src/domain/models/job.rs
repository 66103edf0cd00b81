// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{same_identity, DomainEntity, EntityRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

/// 工作实体
///
/// 用户发布的一项工作及其报价，属性见 [`JobAttribute`](super::job_attribute::JobAttribute)。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Job {
    pub id: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub offer: Option<Decimal>,
    pub user: Option<EntityRef>,
}

impl DomainEntity for Job {
    const ENTITY_NAME: &'static str = "job";
    const RESOURCE: &'static str = "jobs";
    const INDEX_NAME: &'static str = "job";
    const PAGINATED: bool = true;
    const OWNED: bool = true;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || same_identity(self.id, other.id)
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
