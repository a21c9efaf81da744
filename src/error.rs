//! 요청 단위 에러.
//!
//! 어떤 실패도 프로세스를 죽이지 않고, 해당 요청의 응답으로만 변환된다.
//! - 클라이언트 입력 에러 → 4xx + `{message}`
//! - 저장소 장애 → 500 + 고정 메시지 (상세 내용은 로그에만 남김)

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::extract::AppJson;

#[derive(Debug, Error)]
pub enum AppError {
    /// JSON 바디 파싱 실패 (문법 오류 400, 필드 누락 422, Content-Type 누락 415)
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// 경로 파라미터 추출 실패 (숫자가 아닌 id 등)
    #[error("{message}")]
    Path {
        status: StatusCode,
        message: String,
        location: Option<String>,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonRejection(rejection) => (
                rejection.status(),
                ErrorResponse {
                    message: rejection.body_text(),
                    location: None,
                },
            ),
            AppError::Path {
                status,
                message,
                location,
            } => (status, ErrorResponse { message, location }),
            AppError::Database(err) => {
                // 클라이언트에 DB 에러 내용은 노출하지 않음
                tracing::error!(%err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "Something went wrong".to_owned(),
                        location: None,
                    },
                )
            }
        };

        (status, AppJson(body)).into_response()
    }
}
