use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct LogoutRequest {
    pub refresh_token: String,
}

#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<LogoutRequest>,
) -> impl Responder {
    match data.logout_use_case.execute(&payload.refresh_token).await {
        Ok(()) => ApiResponse::no_content(),
        Err(LogoutError::InvalidToken) => {
            ApiResponse::bad_request("INVALID_TOKEN", "Invalid refresh token")
        }
        Err(err) => {
            tracing::error!("Logout failed: {err}");
            ApiResponse::internal_error()
        }
    }
}
