use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    /// Loads the JWT configuration from environment variables.
    /// `JWT_SECRET` is mandatory; the expiries default to 1 hour and
    /// 7 days.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .expect("Invalid JWT_ACCESS_EXPIRY value");

        let refresh_token_expiry = env::var("JWT_REFRESH_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string())
            .parse::<i64>()
            .expect("Invalid JWT_REFRESH_EXPIRY value");

        Self {
            secret_key,
            access_token_expiry,
            refresh_token_expiry,
        }
    }
}
