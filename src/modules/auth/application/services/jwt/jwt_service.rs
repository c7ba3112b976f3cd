use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::modules::auth::application::domain::Role;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate(&self, user_id: Uuid, role: Role, token_type: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiry = match token_type {
            "refresh" => self.config.refresh_token_expiry,
            _ => self.config.access_token_expiry,
        };

        let claims = TokenClaims {
            sub: user_id,
            exp: (now + Duration::seconds(expiry)).timestamp(),
            iat: now.timestamp(),
            token_type: token_type.to_string(),
            role: role.as_str().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtService {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.generate(user_id, role, "access")
    }

    fn generate_refresh_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.generate(user_id, role, "refresh")
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is enforced below so the error can be distinguished.
        validation.validate_exp = false;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::MalformedToken,
                }
            })?;

        if decoded.claims.exp < Utc::now().timestamp() {
            return Err(TokenError::TokenExpired);
        }

        Ok(decoded.claims)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;

        if claims.token_type != "refresh" {
            return Err(TokenError::InvalidTokenType("refresh".to_string()));
        }

        let role = Role::parse(&claims.role).ok_or(TokenError::MalformedToken)?;
        self.generate(claims.sub, role, "access")
    }
}
