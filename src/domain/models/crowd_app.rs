// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{same_identity, DomainEntity, EntityRef};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

/// 众包应用实体
///
/// 与 [`App`](super::app::App) 结构相近，`source` 为不限长度的源码文本。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CrowdApp {
    pub id: Option<i64>,
    #[validate(required, length(min = 3, max = 50))]
    pub name: Option<String>,
    pub version: Option<i32>,
    pub source: Option<String>,
    pub user: Option<EntityRef>,
}

impl DomainEntity for CrowdApp {
    const ENTITY_NAME: &'static str = "crowdApp";
    const RESOURCE: &'static str = "crowd-apps";
    const INDEX_NAME: &'static str = "crowdapp";
    const PAGINATED: bool = true;
    const OWNED: bool = true;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl PartialEq for CrowdApp {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || same_identity(self.id, other.id)
    }
}

impl Eq for CrowdApp {}

impl Hash for CrowdApp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
