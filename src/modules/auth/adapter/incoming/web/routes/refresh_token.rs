use actix_web::{post, web, Responder};

use crate::modules::auth::application::use_cases::refresh_token::{
    RefreshError, RefreshTokenRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    data: web::Data<AppState>,
    payload: web::Json<RefreshTokenRequest>,
) -> impl Responder {
    match data
        .refresh_token_use_case
        .execute(payload.into_inner())
        .await
    {
        Ok(response) => ApiResponse::success(response),
        Err(RefreshError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired refresh token")
        }
        Err(RefreshError::TokenRevoked) => {
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }
        Err(err) => {
            tracing::error!("Token refresh failed: {err}");
            ApiResponse::internal_error()
        }
    }
}
