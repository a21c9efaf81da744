//! `userdetails` 테이블의 레코드와 요청/응답 바디 타입.

use serde::{Deserialize, Serialize};

/// 🧍 사용자 레코드 (DB row 그대로 JSON 응답으로 직렬화)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// ✏️ 생성/수정 요청 바디
///
/// `id` 필드는 받지 않음. 요청에 섞여 와도 serde가 무시하고, id는 항상 DB가 부여한다.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// 📨 `{id, message}` 형태의 공통 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub message: String,
}

impl MessageResponse {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// GET /users/getuser/{id} 응답
///
/// 없는 id도 에러가 아니라 200 + `{id, message}` 로 응답하므로 untagged enum 으로 둘 중 하나를 그대로 직렬화.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GetUserResponse {
    Found(User),
    Missing(MessageResponse),
}
