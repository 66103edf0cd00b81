// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{same_identity, DomainEntity, EntityRef};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

/// 应用实体
///
/// 用户发布的一个应用，`user_app` 指向其归属用户。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct App {
    pub id: Option<i64>,
    #[validate(required, length(min = 3, max = 50))]
    pub name: Option<String>,
    pub source: Option<String>,
    pub version: Option<i32>,
    pub user_app: Option<EntityRef>,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl DomainEntity for App {
    const ENTITY_NAME: &'static str = "app";
    const RESOURCE: &'static str = "apps";
    const INDEX_NAME: &'static str = "app";
    const PAGINATED: bool = true;
    const OWNED: bool = true;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl PartialEq for App {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || same_identity(self.id, other.id)
    }
}

impl Eq for App {}

impl Hash for App {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
