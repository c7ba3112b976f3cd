use actix_web::{get, web, Responder};

use super::map_watchlist_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's most recent list activity, both lists interleaved.
#[get("/api/me/activity")]
pub async fn get_activity_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.watchlist_service.activity(user.user_id).await {
        Ok(movies) => ApiResponse::success(movies),
        Err(err) => map_watchlist_error(err),
    }
}
