use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::map_watchlist_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct AddToWatchlistRequest {
    pub movie_id: Uuid,
}

#[post("/api/me/watchlist")]
pub async fn add_to_watchlist_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<AddToWatchlistRequest>,
) -> impl Responder {
    match data
        .watchlist_service
        .add_or_update(user.user_id, payload.movie_id, false, None, None)
        .await
    {
        Ok(entry) => ApiResponse::created(entry),
        Err(err) => map_watchlist_error(err),
    }
}
