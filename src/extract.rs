//! 커스텀 추출기.
//!
//! axum 기본 `Json`/`Path` 는 실패 시 text/plain 응답을 돌려주므로,
//! 실패를 [`AppError`] 로 바꿔 모든 에러 응답이 JSON 이 되도록 감싼다.

use axum::{
    extract::{path::ErrorKind, rejection::PathRejection, FromRequest, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// ✨ JSON 요청/응답 래퍼 (추출 실패 시 AppError)
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))] // JsonRejection → AppError (#[from])
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// ✨ 경로 파라미터 추출기
///
/// `/users/getuser/abc` 처럼 숫자가 아닌 id 는 400 + 어느 값이 잘못됐는지 알려주는 메시지.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 기본 Path 추출기에 위임하고 거절만 바꿔치기
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(path_error(rejection)),
        }
    }
}

fn path_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(inner) => {
            let kind = inner.into_kind(); // 어느 키/값이 문제인지
            let message = kind.to_string();

            let (status, location) = match &kind {
                ErrorKind::ParseErrorAtKey { key, .. } => (StatusCode::BAD_REQUEST, Some(key.clone())),
                ErrorKind::ParseErrorAtIndex { index, .. } => {
                    (StatusCode::BAD_REQUEST, Some(index.to_string()))
                }
                ErrorKind::InvalidUtf8InPathParam { key } => {
                    (StatusCode::BAD_REQUEST, Some(key.clone()))
                }
                // 라우트 정의와 추출 타입이 안 맞는 경우 → 서버 쪽 버그
                ErrorKind::UnsupportedType { .. } => (StatusCode::INTERNAL_SERVER_ERROR, None),
                _ => (StatusCode::BAD_REQUEST, None),
            };

            AppError::Path {
                status,
                message,
                location,
            }
        }
        PathRejection::MissingPathParams(error) => AppError::Path {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: error.to_string(),
            location: None,
        },
        _ => AppError::Path {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Unhandled path rejection: {rejection}"),
            location: None,
        },
    }
}
