//! 영속성 경계.
//!
//! 핸들러/서비스는 `Arc<dyn UserRepo>` 만 알고, 실제 구현은
//! - 운영: [`PgUserRepo`] (sqlx + PostgreSQL)
//! - 테스트: `memory::InMemoryUserRepo`
//!
//! 모든 메서드는 SQL 문 하나에 해당하며 재시도하지 않는다.

mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::model::{User, UserInput};

pub use postgres::PgUserRepo;

/// 🧩 DI 대상이 될 저장소 Trait
#[async_trait]
pub trait UserRepo: Send + Sync {
    /// 새 row 삽입 후 DB가 생성한 id 반환.
    async fn insert(&self, input: &UserInput) -> Result<i64, sqlx::Error>;

    /// id로 단건 조회. row가 없으면 `Ok(None)`.
    async fn find(&self, id: i64) -> Result<Option<User>, sqlx::Error>;

    /// 전체 조회 (id 오름차순).
    async fn list(&self) -> Result<Vec<User>, sqlx::Error>;

    /// name/email/contact 세 필드를 모두 덮어씀. 영향 받은 row 수 반환 (0 또는 1).
    async fn update(&self, id: i64, input: &UserInput) -> Result<u64, sqlx::Error>;

    /// 삭제 후 영향 받은 row 수 반환 (0 또는 1).
    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error>;
}
