//! 다섯 가지 연산을 저장소에 위임하고 응답 바디를 만든다.
//!
//! "없는 id" 는 에러가 아니라 정상 응답이다. 에러는 저장소 장애(`sqlx::Error`)뿐이다.

use std::sync::Arc;

use crate::{
    model::{GetUserResponse, MessageResponse, User, UserInput},
    store::UserRepo,
};

pub const ADDED: &str = "Successfully added User";
pub const NO_DATA: &str = "No data with given Id";
pub const NO_ROW: &str = "No row with given Id";

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepo>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: UserInput) -> Result<MessageResponse, sqlx::Error> {
        let id = self.repo.insert(&input).await?;
        tracing::info!(id, "inserted a single record");

        Ok(MessageResponse::new(id, ADDED))
    }

    pub async fn get_one(&self, id: i64) -> Result<GetUserResponse, sqlx::Error> {
        Ok(match self.repo.find(id).await? {
            Some(user) => GetUserResponse::Found(user),
            None => GetUserResponse::Missing(MessageResponse::new(id, NO_DATA)),
        })
    }

    pub async fn get_all(&self) -> Result<Vec<User>, sqlx::Error> {
        self.repo.list().await
    }

    pub async fn update(&self, id: i64, input: UserInput) -> Result<MessageResponse, sqlx::Error> {
        let rows = self.repo.update(id, &input).await?;
        tracing::debug!(id, rows, "update finished");

        Ok(affected(id, rows, |n| format!("Total rows affected {n}")))
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, sqlx::Error> {
        let rows = self.repo.delete(id).await?;
        tracing::debug!(id, rows, "delete finished");

        Ok(affected(id, rows, |n| format!("Total Rows deleted, {n}")))
    }
}

// 영향 받은 row 가 0이면 공통 메시지, 아니면 연산별 메시지
fn affected(id: i64, rows: u64, message: impl FnOnce(u64) -> String) -> MessageResponse {
    if rows == 0 {
        MessageResponse::new(id, NO_ROW)
    } else {
        MessageResponse::new(id, message(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryUserRepo;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepo::default()))
    }

    fn ann() -> UserInput {
        UserInput {
            name: "Ann".to_owned(),
            email: "a@x.com".to_owned(),
            contact: "555".to_owned(),
        }
    }

    #[tokio::test]
    async fn create_then_get_one() {
        let service = service();

        let created = service.create(ann()).await.unwrap();
        assert_eq!(created, MessageResponse::new(1, ADDED));

        let found = service.get_one(1).await.unwrap();
        assert_eq!(
            found,
            GetUserResponse::Found(User {
                id: 1,
                name: "Ann".to_owned(),
                email: "a@x.com".to_owned(),
                contact: "555".to_owned(),
            })
        );
    }

    #[tokio::test]
    async fn get_one_missing_is_not_an_error() {
        let found = service().get_one(7).await.unwrap();

        assert_eq!(
            found,
            GetUserResponse::Missing(MessageResponse::new(7, NO_DATA))
        );
    }

    #[tokio::test]
    async fn update_and_delete_report_affected_rows() {
        let service = service();
        let id = service.create(ann()).await.unwrap().id;

        let updated = service.update(id, ann()).await.unwrap();
        assert_eq!(updated.message, "Total rows affected 1");

        let deleted = service.delete(id).await.unwrap();
        assert_eq!(deleted.message, "Total Rows deleted, 1");

        let deleted_again = service.delete(id).await.unwrap();
        assert_eq!(deleted_again, MessageResponse::new(id, NO_ROW));

        let updated_again = service.update(id, ann()).await.unwrap();
        assert_eq!(updated_again, MessageResponse::new(id, NO_ROW));
    }
}
