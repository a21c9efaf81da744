//! 📚 라우트별 핸들러
//!
//! 핸들러는 추출 → 서비스 호출 → JSON 응답만 담당한다.
//! OPTIONS 요청은 CorsLayer 가 먼저 응답하므로 여기까지 오지 않는다.
//! Path 추출기는 항상 Json 바디 추출기보다 앞에 둔다 (바디 추출기는 마지막 인자여야 함).

use axum::extract::State; // 공유 상태(UserService) 주입

use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    model::{GetUserResponse, MessageResponse, User, UserInput},
    service::UserService,
};

// 1️⃣ POST /users/adduser
pub async fn create_user(
    State(users): State<UserService>,
    AppJson(input): AppJson<UserInput>, // 파싱 실패 시 AppError (400/415/422)
) -> Result<AppJson<MessageResponse>, AppError> {
    Ok(AppJson(users.create(input).await?)) // DB 에러는 ? 로 AppError::Database 변환
}

// 2️⃣ GET /users/getusers
pub async fn get_all_users(
    State(users): State<UserService>,
) -> Result<AppJson<Vec<User>>, AppError> {
    Ok(AppJson(users.get_all().await?))
}

// 3️⃣ GET /users/getuser/{id}
pub async fn get_user(
    State(users): State<UserService>,
    AppPath(id): AppPath<i64>, // 숫자가 아니면 400
) -> Result<AppJson<GetUserResponse>, AppError> {
    // 없는 id 도 200 (GetUserResponse::Missing)
    Ok(AppJson(users.get_one(id).await?))
}

// 4️⃣ PATCH /users/updateuser/{id}
pub async fn update_user(
    State(users): State<UserService>,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<UserInput>, // 바디 추출기는 항상 마지막
) -> Result<AppJson<MessageResponse>, AppError> {
    Ok(AppJson(users.update(id, input).await?))
}

// 5️⃣ DELETE /users/deleteuser/{id}
pub async fn delete_user(
    State(users): State<UserService>,
    AppPath(id): AppPath<i64>,
) -> Result<AppJson<MessageResponse>, AppError> {
    Ok(AppJson(users.delete(id).await?))
}
