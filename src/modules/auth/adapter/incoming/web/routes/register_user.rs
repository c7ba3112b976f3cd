use actix_web::{post, web, Responder};

use crate::modules::auth::application::use_cases::register_user::{RegisterError, RegisterRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Successful registration signs the account in right away.
#[post("/api/auth/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> impl Responder {
    match data.register_use_case.execute(payload.into_inner()).await {
        Ok(response) => ApiResponse::created(response),
        Err(RegisterError::AccountExists) => {
            ApiResponse::conflict("ACCOUNT_EXISTS", "Username or email is already taken")
        }
        Err(err) => {
            tracing::error!("Registration failed: {err}");
            ApiResponse::internal_error()
        }
    }
}
