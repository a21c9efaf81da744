//! 테스트용 메모리 저장소.
//!
//! id 는 1부터 증가하며 삭제된 id 는 재사용하지 않는다 (BIGSERIAL 과 동일).

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;

use super::UserRepo;
use crate::model::{User, UserInput};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepo {
    last_id: Arc<AtomicI64>,
    rows: Arc<Mutex<BTreeMap<i64, User>>>,
}

#[async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn insert(&self, input: &UserInput) -> Result<i64, sqlx::Error> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;

        let user = User {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            contact: input.contact.clone(),
        };
        self.rows.lock().unwrap().insert(id, user);

        Ok(id)
    }

    async fn find(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: i64, input: &UserInput) -> Result<u64, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();

        match rows.get_mut(&id) {
            Some(user) => {
                user.name = input.name.clone();
                user.email = input.email.clone();
                user.contact = input.contact.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        Ok(u64::from(self.rows.lock().unwrap().remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> UserInput {
        UserInput {
            name: name.to_owned(),
            email: format!("{name}@x.com"),
            contact: "555".to_owned(),
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let repo = InMemoryUserRepo::default();

        let first = repo.insert(&input("ann")).await.unwrap();
        assert_eq!(repo.delete(first).await.unwrap(), 1);
        let second = repo.insert(&input("bob")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn update_missing_row_changes_nothing() {
        let repo = InMemoryUserRepo::default();
        repo.insert(&input("ann")).await.unwrap();

        assert_eq!(repo.update(42, &input("bob")).await.unwrap(), 0);

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "ann");
    }
}
