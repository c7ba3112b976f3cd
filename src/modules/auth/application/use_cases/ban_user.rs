use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::{Role, UserSummary};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

const DEFAULT_BAN_HOURS: i64 = 24;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BanUserError {
    #[error("User not found")]
    UserNotFound,
    #[error("Admin accounts cannot be banned")]
    CannotBanAdmin,
    #[error("Ban duration must be positive")]
    InvalidDuration,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Bans the target account. An explicit duration always sets the expiry
/// to now + duration, replacing any active ban. A duration-less call
/// toggles: it lifts an active ban, otherwise the default window applies.
#[async_trait]
pub trait IBanUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        hours: Option<i64>,
    ) -> Result<UserSummary, BanUserError>;
}

pub struct BanUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> BanUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IBanUserUseCase for BanUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        hours: Option<i64>,
    ) -> Result<UserSummary, BanUserError> {
        if hours.is_some_and(|h| h <= 0) {
            return Err(BanUserError::InvalidDuration);
        }

        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(map_repo_error)?
            .ok_or(BanUserError::UserNotFound)?;

        if user.role == Role::Admin {
            return Err(BanUserError::CannotBanAdmin);
        }

        let now = Utc::now();
        let banned_until = match hours {
            // An explicit duration overwrites whatever ban is in place.
            Some(h) => Some(now + Duration::hours(h)),
            None if user.is_banned_at(now) => None,
            None => Some(now + Duration::hours(DEFAULT_BAN_HOURS)),
        };

        let updated = self
            .repository
            .set_ban(user_id, banned_until)
            .await
            .map_err(map_repo_error)?;

        Ok(updated.into())
    }
}

fn map_repo_error(err: UserRepositoryError) -> BanUserError {
    match err {
        UserRepositoryError::UserNotFound => BanUserError::UserNotFound,
        other => BanUserError::RepositoryError(other.to_string()),
    }
}
