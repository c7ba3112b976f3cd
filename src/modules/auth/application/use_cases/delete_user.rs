use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::Role;
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,
    #[error("Admin accounts cannot be deleted")]
    CannotDeleteAdmin,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Permanently removes an account. List entries, ratings and reports go
/// with it through the foreign keys.
#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteUserError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?
            .ok_or(DeleteUserError::UserNotFound)?;

        if user.role == Role::Admin {
            return Err(DeleteUserError::CannotDeleteAdmin);
        }

        self.repository.delete(user_id).await.map_err(|e| match e {
            UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
            other => DeleteUserError::RepositoryError(other.to_string()),
        })
    }
}
