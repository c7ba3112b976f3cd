use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::auth::application::use_cases::ban_user::BanUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
struct BanRequest {
    pub hours: Option<i64>,
}

/// Without an explicit duration the ban toggles: an active ban is lifted,
/// otherwise the default window applies.
#[post("/api/users/{id}/ban")]
pub async fn ban_user_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: Option<web::Json<BanRequest>>,
) -> impl Responder {
    let hours = payload.map(|p| p.into_inner()).unwrap_or_default().hours;

    match data
        .ban_user_use_case
        .execute(path.into_inner(), hours)
        .await
    {
        Ok(user) => ApiResponse::success(user),
        Err(BanUserError::UserNotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(BanUserError::CannotBanAdmin) => {
            ApiResponse::forbidden("CANNOT_BAN_ADMIN", "Admin accounts cannot be banned")
        }
        Err(BanUserError::InvalidDuration) => {
            ApiResponse::bad_request("INVALID_DURATION", "Ban duration must be positive")
        }
        Err(err) => {
            tracing::error!("Ban failed: {err}");
            ApiResponse::internal_error()
        }
    }
}
