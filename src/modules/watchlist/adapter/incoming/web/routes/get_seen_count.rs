use actix_web::{get, web, Responder};
use serde::Serialize;

use super::map_watchlist_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
struct SeenCountResponse {
    count: u64,
}

#[get("/api/me/seen/count")]
pub async fn get_seen_count_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.watchlist_service.count_watched(user.user_id).await {
        Ok(count) => ApiResponse::success(SeenCountResponse { count }),
        Err(err) => map_watchlist_error(err),
    }
}
