// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::error_response::FieldErrorDto;
use crate::domain::models::DomainEntity;
use crate::presentation::errors::AlertError;
use axum::extract::{FromRequest, Request};
use axum::Json;
use validator::ValidationErrors;

/// 经过结构校验的实体请求体
///
/// JSON 无法解析或字段约束不满足时直接以 400 拒绝，不会进入处理器。
#[derive(Debug, Clone)]
pub struct ValidatedEntity<E>(pub E);

impl<S, E> FromRequest<S> for ValidatedEntity<E>
where
    E: DomainEntity,
    S: Send + Sync,
{
    type Rejection = AlertError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(entity) = Json::<E>::from_request(req, state)
            .await
            .map_err(|rejection| AlertError::new(E::ENTITY_NAME, "badrequest", rejection.body_text()))?;

        entity
            .validate()
            .map_err(|errors| AlertError::validation(E::ENTITY_NAME, field_errors(E::ENTITY_NAME, &errors)))?;

        Ok(Self(entity))
    }
}

/// 按字段名排序的字段错误列表
pub fn field_errors(object_name: &str, errors: &ValidationErrors) -> Vec<FieldErrorDto> {
    let mut result: Vec<FieldErrorDto> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldErrorDto {
                object_name: object_name.to_string(),
                field: field.to_string(),
                message: constraint_name(&error.code).to_string(),
            })
        })
        .collect();
    result.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    result
}

fn constraint_name(code: &str) -> &str {
    match code {
        "required" => "NotNull",
        "length" => "Size",
        other => other,
    }
}
