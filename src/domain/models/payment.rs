// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{same_identity, DomainEntity, EntityRef};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

/// 支付实体
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Payment {
    pub id: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// 支付日期
    pub time: Option<NaiveDate>,
    pub user: Option<EntityRef>,
}

impl DomainEntity for Payment {
    const ENTITY_NAME: &'static str = "payment";
    const RESOURCE: &'static str = "payments";
    const INDEX_NAME: &'static str = "payment";
    const PAGINATED: bool = false;
    const OWNED: bool = true;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || same_identity(self.id, other.id)
    }
}

impl Eq for Payment {}

impl Hash for Payment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
