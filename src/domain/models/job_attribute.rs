// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{same_identity, DomainEntity, EntityRef};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

/// 工作属性实体，键值对形式挂在父 [`Job`](super::job::Job) 下
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct JobAttribute {
    pub id: Option<i64>,
    #[validate(required)]
    pub name: Option<String>,
    pub value: Option<String>,
    pub job: Option<EntityRef>,
}

impl DomainEntity for JobAttribute {
    const ENTITY_NAME: &'static str = "jobAttribute";
    const RESOURCE: &'static str = "job-attributes";
    const INDEX_NAME: &'static str = "jobattribute";
    const PAGINATED: bool = false;
    const OWNED: bool = false;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl PartialEq for JobAttribute {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || same_identity(self.id, other.id)
    }
}

impl Eq for JobAttribute {}

impl Hash for JobAttribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
