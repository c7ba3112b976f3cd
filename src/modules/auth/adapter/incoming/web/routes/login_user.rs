use actix_web::{post, web, Responder};

use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    match data.login_use_case.execute(payload.into_inner()).await {
        Ok(response) => ApiResponse::success(response),
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginError::Banned { until }) => ApiResponse::forbidden(
            "USER_BANNED",
            &format!("Account is banned until {}", until.to_rfc3339()),
        ),
        Err(err) => {
            tracing::error!("Login failed: {err}");
            ApiResponse::internal_error()
        }
    }
}
