use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;

use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::token_repository::TokenRepository;
use crate::modules::auth::application::services::hash::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid refresh token")]
    InvalidToken,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Revokes a refresh token by blacklisting its hash until it would have
/// expired anyway.
#[async_trait]
pub trait ILogoutUserUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError>;
}

pub struct LogoutUserUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    token_repository: T,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<T> LogoutUserUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: T, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<T> ILogoutUserUseCase for LogoutUserUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError> {
        let claims = self
            .token_provider
            .verify_token(refresh_token)
            .map_err(|_| LogoutError::InvalidToken)?;

        if claims.token_type != "refresh" {
            return Err(LogoutError::InvalidToken);
        }

        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).ok_or(LogoutError::InvalidToken)?;

        self.token_repository
            .blacklist_token(hash_token(refresh_token), claims.sub, expires_at)
            .await
            .map_err(|e| LogoutError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::token_repository::TokenRepositoryError;
    use crate::tests::support::stubs::StubTokenProvider;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct MockTokenRepository {
        blacklisted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TokenRepository for MockTokenRepository {
        async fn blacklist_token(
            &self,
            token_hash: String,
            _user_id: Uuid,
            _expires_at: chrono::DateTime<Utc>,
        ) -> Result<(), TokenRepositoryError> {
            self.blacklisted.lock().unwrap().push(token_hash);
            Ok(())
        }

        async fn is_token_blacklisted(
            &self,
            token_hash: &str,
        ) -> Result<bool, TokenRepositoryError> {
            Ok(self
                .blacklisted
                .lock()
                .unwrap()
                .iter()
                .any(|h| h == token_hash))
        }
    }

    #[tokio::test]
    async fn logout_blacklists_the_token_hash() {
        let use_case = LogoutUserUseCase::new(
            MockTokenRepository::default(),
            Arc::new(StubTokenProvider::refresh(Uuid::new_v4())),
        );

        use_case.execute("some-refresh-token").await.unwrap();

        let is_blacklisted = use_case
            .token_repository
            .is_token_blacklisted(&hash_token("some-refresh-token"))
            .await
            .unwrap();
        assert!(is_blacklisted);
    }

    #[tokio::test]
    async fn access_token_is_rejected() {
        let use_case = LogoutUserUseCase::new(
            MockTokenRepository::default(),
            Arc::new(StubTokenProvider::user(Uuid::new_v4())),
        );

        let result = use_case.execute("some-access-token").await;
        assert!(matches!(result, Err(LogoutError::InvalidToken)));
        assert!(use_case
            .token_repository
            .blacklisted
            .lock()
            .unwrap()
            .is_empty());
    }
}
