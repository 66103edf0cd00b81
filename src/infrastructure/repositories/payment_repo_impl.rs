// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sql_repository::{RowMapping, SqlRepository};
use crate::domain::models::payment::Payment;
use crate::domain::models::EntityRef;
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::infrastructure::database::entities::payment;
use sea_orm::{ActiveValue::NotSet, Set};

/// 支付仓库实现
pub type PaymentRepoImpl = SqlRepository<PaymentMapping>;

pub struct PaymentMapping;

impl RowMapping for PaymentMapping {
    type Entity = payment::Entity;
    type ActiveModel = payment::ActiveModel;
    type Domain = Payment;

    fn id_column() -> payment::Column {
        payment::Column::Id
    }

    fn owner_column() -> Option<payment::Column> {
        Some(payment::Column::UserId)
    }

    fn into_domain(model: payment::Model) -> Payment {
        Payment {
            id: Some(model.id),
            amount: model.amount.map(|amount| amount.normalize()),
            time: model.time,
            user: model.user_id.map(EntityRef::new),
        }
    }

    fn into_active_model(entity: &Payment) -> Result<payment::ActiveModel, RepositoryError> {
        Ok(payment::ActiveModel {
            id: entity.id.map_or(NotSet, Set),
            amount: Set(entity.amount),
            time: Set(entity.time),
            user_id: Set(entity.user.map(|user| user.id)),
        })
    }
}
