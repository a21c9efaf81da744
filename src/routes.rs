//! 라우터 구성.
//!
//! | Method | Path | 연산 |
//! |---|---|---|
//! | POST | `/users/adduser` | 생성 |
//! | GET | `/users/getusers` | 전체 조회 |
//! | GET | `/users/getuser/{id}` | 단건 조회 |
//! | PATCH | `/users/updateuser/{id}` | 수정 |
//! | DELETE | `/users/deleteuser/{id}` | 삭제 |
//!
//! 모든 경로는 OPTIONS 도 받는다. OPTIONS 는 CorsLayer 가 핸들러 호출 없이 바로 응답한다.

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer, // 미들웨어 에러(BoxError) → 응답 변환
    extract::{MatchedPath, Request},
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Router,
};
use serde_json::{json, Value};
use tower::{BoxError, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},               // CORS 레이어
    set_header::SetResponseHeaderLayer,   // 특정 라우트 응답 헤더 고정
    trace::TraceLayer,                    // 요청/응답 로그 추적
};

use crate::{
    extract::AppJson,
    handlers::{create_user, delete_user, get_all_users, get_user, update_user},
    service::UserService,
};

/// 테스트에서 HTTP 서버 없이 바로 호출할 수 있도록 라우터를 함수로 분리
pub fn app(users: UserService, request_timeout: Duration) -> Router {
    Router::new()
        // 생성 라우트에만 허용 메서드/헤더 응답 헤더를 추가
        .route(
            "/users/adduser",
            post(create_user).layer(create_cors_headers()),
        )
        .route("/users/getusers", get(get_all_users))
        .route("/users/getuser/{id}", get(get_user))
        .route("/users/updateuser/{id}", patch(update_user))
        .route("/users/deleteuser/{id}", delete(delete_user))
        // 경로는 맞는데 메서드가 다를 때 (라우트 등록 뒤에 호출해야 모든 라우트에 적용됨)
        .method_not_allowed_fallback(handler_405)
        // 정의되지 않은 모든 경로
        .fallback(handler_404)
        // 위에서부터 바깥쪽: 로그 → CORS → 타임아웃 에러 변환 → 타임아웃
        // (408 응답에도 CORS 헤더가 붙도록 CORS 를 타임아웃보다 바깥에 둠)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
                    let method = req.method();
                    let uri = req.uri();
                    let matched_path = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|matched| matched.as_str()); // 예: "/users/getuser/{id}"

                    tracing::debug_span!("request", %method, %uri, matched_path)
                }))
                .layer(cors())
                .layer(HandleErrorLayer::new(handle_middleware_error)) // 타임아웃 에러 → JSON 응답
                .timeout(request_timeout) // 요청당 최대 처리 시간
                .into_inner(),
        )
        .with_state(users) // 공유 상태로 UserService 등록
}

// 모든 응답에 `Access-Control-Allow-Origin: *`.
// OPTIONS 요청은 전부 preflight 로 취급되어 안쪽 서비스까지 내려가지 않음.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any) // 모든 출처 허용
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]) // JSON 바디 전송용
}

// 생성 라우트 응답에는 허용 메서드/헤더를 명시적으로 붙임
fn create_cors_headers() -> (
    SetResponseHeaderLayer<HeaderValue>,
    SetResponseHeaderLayer<HeaderValue>,
) {
    (
        SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST"),
        ),
        SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
    )
}

/// ⏱️ 타임아웃 등 미들웨어 에러도 JSON 으로 응답
async fn handle_middleware_error(error: BoxError) -> (StatusCode, AppJson<Value>) {
    if error.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            AppJson(json!({ "message": "request timed out" })),
        )
    } else {
        tracing::error!(%error, "unhandled middleware error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            AppJson(json!({ "message": "Something went wrong" })),
        )
    }
}

/// 🚫 정의되지 않은 경로
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        AppJson(json!({ "message": "nothing to see here" })),
    )
}

/// 🚫 지원하지 않는 메서드 (예: PUT /users/getusers)
async fn handler_405() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        AppJson(json!({ "message": "method not allowed on this path" })),
    )
}
