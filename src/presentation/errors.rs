// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::application::dto::error_response::{ErrorResponseDto, FieldErrorDto};
use crate::domain::repositories::entity_repository::RepositoryError;
use crate::domain::search::index::SearchError;
use crate::domain::services::entity_service::ServiceError;
use crate::presentation::headers;

/// 带失败告警头的请求错误
///
/// 响应为 400，头部为 `X-crowdwareApp-error: error.<key>` 与 `X-crowdwareApp-params: <entity>`，
/// 响应体为 [`ErrorResponseDto`]。
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AlertError {
    pub entity_name: String,
    pub error_key: String,
    pub message: String,
    pub field_errors: Vec<FieldErrorDto>,
}

impl AlertError {
    pub fn new(
        entity_name: impl Into<String>,
        error_key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            error_key: error_key.into(),
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    /// 创建请求携带了标识
    pub fn id_exists(entity_name: &str) -> Self {
        Self::new(
            entity_name,
            "idexists",
            format!("A new {} cannot already have an ID", entity_name),
        )
    }

    /// 字段校验失败
    pub fn validation(entity_name: &str, field_errors: Vec<FieldErrorDto>) -> Self {
        Self {
            field_errors,
            ..Self::new(entity_name, "validation", "error.validation")
        }
    }
}

impl IntoResponse for AlertError {
    fn into_response(self) -> Response {
        let headers = headers::failure_alert(&self.entity_name, &self.error_key);
        let body = ErrorResponseDto {
            entity_name: self.entity_name,
            error_key: self.error_key,
            message: self.message,
            field_errors: self.field_errors,
        };
        (StatusCode::BAD_REQUEST, headers, Json(body)).into_response()
    }
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<AlertError>().is_some() {
            return StatusCode::BAD_REQUEST;
        }

        let repository = self.0.downcast_ref::<RepositoryError>().or_else(|| {
            match self.0.downcast_ref::<ServiceError>() {
                Some(ServiceError::Repository(err)) => Some(err),
                _ => None,
            }
        });
        let search = self.0.downcast_ref::<SearchError>().or_else(|| {
            match self.0.downcast_ref::<ServiceError>() {
                Some(ServiceError::Search(err)) => Some(err),
                _ => None,
            }
        });

        match (repository, search) {
            (Some(RepositoryError::NotFound), _) => StatusCode::NOT_FOUND,
            (Some(RepositoryError::InvalidParameter(_)), _) => StatusCode::BAD_REQUEST,
            (_, Some(SearchError::InvalidQuery(_))) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        let error = match self.0.downcast::<AlertError>() {
            Ok(alert) => return alert.into_response(),
            Err(error) => error,
        };

        let error_message = error.to_string();
        if status.is_server_error() {
            error!("Request failed: {:#}", error);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
