use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::{Role, User, UserSummary};
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_USERNAME_LEN: usize = 32;

/// Validated registration payload; deserialization rejects bad input.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("Username must be 3 to 32 characters of letters, digits or underscores")]
    InvalidUsername,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    WeakPassword,
}

impl RegisterRequest {
    pub fn new(
        username: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let username = username.trim().to_string();
        if username.len() < 3
            || username.len() > MAX_USERNAME_LEN
            || !username.chars().all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(RegisterRequestError::InvalidUsername);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmail);
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterRequestError::WeakPassword);
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            username: String,
            email: String,
            password: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        RegisterRequest::new(helper.username, helper.email, helper.password)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("Username or email is already taken")]
    AccountExists,
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserSummary,
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisterUserResponse, RegisterError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4(),
            username: request.username().to_string(),
            email: request.email().to_string(),
            password_hash,
            role: Role::User,
            banned_until: None,
            created_at: Utc::now(),
        };

        // The unique indexes on username and email decide conflicts; a
        // pre-check would only race against concurrent registrations.
        let user = self.repository.insert(user).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterError::AccountExists,
            other => RegisterError::RepositoryError(other.to_string()),
        })?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisterUserResponse {
            access_token,
            refresh_token,
            user: user.into(),
        })
    }
}
