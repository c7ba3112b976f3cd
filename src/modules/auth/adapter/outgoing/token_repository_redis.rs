use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

/// Redis-backed token blacklist.
///
/// Two kinds of keys:
///
/// ```text
/// auth:blacklist:token:{token_hash} -> "{user_id}"   (authoritative)
/// auth:blacklist:user:{user_id}     -> SET(token_hash)
/// ```
///
/// Both carry a TTL equal to the token's remaining lifetime, so Redis
/// expiry is the only cleanup mechanism.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    fn user_key(user_id: Uuid) -> String {
        format!("auth:blacklist:user:{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(format!("Pool error: {e}")))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    /// Marks a token as revoked until it would have expired anyway.
    ///
    /// The token key and the user index are written in one MULTI/EXEC
    /// block so a partial write cannot leave the index out of sync.
    /// An already-expired token needs no entry at all.
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Ok(());
        }

        let token_key = Self::token_key(&token_hash);
        let user_key = Self::user_key(user_id);

        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&token_key)
            .arg(user_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&token_key)
            .arg(ttl)
            .ignore()
            .cmd("SADD")
            .arg(&user_key)
            .arg(&token_hash)
            .ignore()
            .cmd("EXPIRE")
            .arg(&user_key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// `EXISTS` on the token key. A missing key means the token was never
    /// revoked or its blacklist entry has already expired with it.
    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }
}
