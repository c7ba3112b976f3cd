use actix_web::{get, web, Responder};
use serde::Deserialize;

use super::map_watchlist_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct SearchListsQuery {
    pub term: Option<String>,
    pub watched: Option<bool>,
}

/// Title search across the caller's lists, optionally narrowed to one
/// side of the watched split.
#[get("/api/me/lists/search")]
pub async fn search_lists_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    query: web::Query<SearchListsQuery>,
) -> impl Responder {
    match data
        .watchlist_service
        .search_in_list(user.user_id, query.term.as_deref(), query.watched)
        .await
    {
        Ok(movies) => ApiResponse::success(movies),
        Err(err) => map_watchlist_error(err),
    }
}
