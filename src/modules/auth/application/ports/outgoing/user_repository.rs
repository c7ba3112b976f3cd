use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> Result<User, UserRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError>;

    /// Email lookup is case-insensitive; stored emails are lowercased.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// `banned` filters on whether a ban is currently active; the
    /// predicate runs in the query so paging stays bounded.
    async fn find_all(
        &self,
        banned: Option<bool>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<User>, UserRepositoryError>;

    async fn search(
        &self,
        term: &str,
        banned: Option<bool>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<User>, UserRepositoryError>;

    /// `None` lifts an active ban.
    async fn set_ban(
        &self,
        user_id: Uuid,
        banned_until: Option<DateTime<Utc>>,
    ) -> Result<User, UserRepositoryError>;

    /// Removes the account; list entries, ratings and reports follow via
    /// foreign keys.
    async fn delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
