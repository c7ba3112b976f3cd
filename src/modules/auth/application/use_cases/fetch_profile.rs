use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::UserSummary;
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserSummary, FetchProfileError>;
}

pub struct FetchProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> FetchProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchProfileUseCase for FetchProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserSummary, FetchProfileError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => FetchProfileError::UserNotFound,
                other => FetchProfileError::RepositoryError(other.to_string()),
            })?
            .ok_or(FetchProfileError::UserNotFound)?;

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::{Role, User};
    use chrono::{DateTime, Utc};

    struct MockUserRepository {
        user: Option<User>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn insert(&self, user: User) -> Result<User, UserRepositoryError> {
            Ok(user)
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError> {
            Ok(self.user.clone().filter(|u| u.id == id))
        }

        async fn find_by_email(&self, _: &str) -> Result<Option<User>, UserRepositoryError> {
            Ok(None)
        }

        async fn find_all(&self, _: Option<bool>, _: u64, _: u64) -> Result<Vec<User>, UserRepositoryError> {
            Ok(vec![])
        }

        async fn search(&self, _: &str, _: Option<bool>, _: u64, _: u64) -> Result<Vec<User>, UserRepositoryError> {
            Ok(vec![])
        }

        async fn set_ban(
            &self,
            _: Uuid,
            _: Option<DateTime<Utc>>,
        ) -> Result<User, UserRepositoryError> {
            Err(UserRepositoryError::UserNotFound)
        }

        async fn delete(&self, _: Uuid) -> Result<(), UserRepositoryError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn fetches_the_profile() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "hash".into(),
            role: Role::User,
            banned_until: None,
            created_at: Utc::now(),
        };
        let id = user.id;
        let use_case = FetchProfileUseCase::new(MockUserRepository { user: Some(user) });

        let summary = use_case.execute(id).await.unwrap();
        assert_eq!(summary.username, "alice");
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let use_case = FetchProfileUseCase::new(MockUserRepository { user: None });

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(FetchProfileError::UserNotFound)));
    }
}
