//! # Course Service エラー定義
//!
//! Course Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラー種別と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `Validation` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `Database` | 500 Internal Server Error（詳細は漏らさずログに記録） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coursehub_domain::DomainError;
use coursehub_shared::ErrorResponse;
use thiserror::Error;

/// Course Service で発生するエラー
#[derive(Debug, Error)]
pub enum CourseServiceError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 入力値の検証失敗
    ///
    /// メッセージは対象フィールド名を含み、そのままレスポンスの detail になる。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] coursehub_infra::InfraError),
}

impl From<DomainError> for CourseServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound { entity_type, id } => {
                Self::NotFound(format!("{entity_type} が見つかりません: {id}"))
            }
        }
    }
}

impl IntoResponse for CourseServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            CourseServiceError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg.clone()))
            }
            CourseServiceError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(msg.clone()),
            ),
            CourseServiceError::Database(e) => {
                // 内部情報はレスポンスに含めず、SpanTrace 付きでログに残す
                tracing::error!(error = %e, span_trace = %e.span_trace(), "データベースエラー");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
