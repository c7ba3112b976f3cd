use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::map_watchlist_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct RateMovieRequest {
    pub rating: i16,
}

/// Rates a movie, marking it watched if it was not already.
#[post("/api/movies/{id}/rating")]
pub async fn rate_movie_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<RateMovieRequest>,
) -> impl Responder {
    match data
        .watchlist_service
        .rate(user.user_id, path.into_inner(), payload.rating)
        .await
    {
        Ok(entry) => ApiResponse::success(entry),
        Err(err) => map_watchlist_error(err),
    }
}
