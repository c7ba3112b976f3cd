use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenError, TokenProvider,
};
use crate::modules::auth::application::ports::outgoing::token_repository::TokenRepository;
use crate::modules::auth::application::services::hash::hash_token;

/// Validated refresh request.
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim().to_string();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }
        Ok(Self { refresh_token })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            refresh_token: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshError {
    #[error("Invalid refresh token")]
    InvalidToken,
    #[error("Refresh token has been revoked")]
    TokenRevoked,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshError>;
}

pub struct RefreshTokenUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    token_repository: T,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<T> RefreshTokenUseCase<T>
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
impl<T> IRefreshTokenUseCase for RefreshTokenUseCase<T>
where
    T: TokenRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshError> {
        let revoked = self
            .token_repository
            .is_token_blacklisted(&hash_token(request.refresh_token()))
            .await
            .map_err(|e| RefreshError::RepositoryError(e.to_string()))?;
        if revoked {
            return Err(RefreshError::TokenRevoked);
        }

        let access_token = self
            .token_provider
            .refresh_access_token(request.refresh_token())
            .map_err(|e| match e {
                TokenError::TokenExpired
                | TokenError::InvalidTokenType(_)
                | TokenError::InvalidSignature
                | TokenError::MalformedToken => RefreshError::InvalidToken,
                TokenError::EncodingError(msg) => RefreshError::RepositoryError(msg),
            })?;

        Ok(RefreshTokenResponse { access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::token_repository::TokenRepositoryError;
    use crate::tests::support::stubs::StubTokenProvider;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    struct MockTokenRepository {
        revoked: bool,
    }

    #[async_trait]
    impl TokenRepository for MockTokenRepository {
        async fn blacklist_token(
            &self,
            _: String,
            _: Uuid,
            _: DateTime<Utc>,
        ) -> Result<(), TokenRepositoryError> {
            Ok(())
        }

        async fn is_token_blacklisted(&self, _: &str) -> Result<bool, TokenRepositoryError> {
            Ok(self.revoked)
        }
    }

    #[test]
    fn request_rejects_blank_token() {
        let result = RefreshTokenRequest::new("   ".into());
        assert_eq!(result.unwrap_err(), RefreshTokenRequestError::EmptyToken);
    }

    #[tokio::test]
    async fn valid_refresh_token_yields_a_new_access_token() {
        let use_case = RefreshTokenUseCase::new(
            MockTokenRepository { revoked: false },
            Arc::new(StubTokenProvider::refresh(Uuid::new_v4())),
        );
        let request = RefreshTokenRequest::new("refresh-token".into()).unwrap();

        let response = use_case.execute(request).await.unwrap();
        assert!(!response.access_token.is_empty());
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() {
        let use_case = RefreshTokenUseCase::new(
            MockTokenRepository { revoked: true },
            Arc::new(StubTokenProvider::refresh(Uuid::new_v4())),
        );
        let request = RefreshTokenRequest::new("refresh-token".into()).unwrap();

        let result = use_case.execute(request).await;
        assert!(matches!(result, Err(RefreshError::TokenRevoked)));
    }
}
