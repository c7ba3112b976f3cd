use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::map_watchlist_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct AddToSeenRequest {
    pub movie_id: Uuid,
    pub rating: Option<i16>,
    pub watched_at: Option<DateTime<Utc>>,
}

/// Marks a movie as seen, optionally rating it in the same call. A movie
/// already on the to-watch list is upgraded in place.
#[post("/api/me/seen")]
pub async fn add_to_seen_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<AddToSeenRequest>,
) -> impl Responder {
    match data
        .watchlist_service
        .add_or_update(
            user.user_id,
            payload.movie_id,
            true,
            payload.rating,
            payload.watched_at,
        )
        .await
    {
        Ok(entry) => ApiResponse::created(entry),
        Err(err) => map_watchlist_error(err),
    }
}
